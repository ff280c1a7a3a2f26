// textmask-core/src/validators.rs
//! Programmatic checksum validation for masked document numbers.
//!
//! A structurally complete value is not necessarily a valid one. These
//! functions verify the check digits of credit card numbers (Luhn), Brazilian
//! CPF and CNPJ numbers. They operate on digits only and ignore any other
//! characters, so they accept raw and display values alike.
//!
//! License: MIT OR APACHE 2.0

fn digits_of(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Validates a number using the Luhn algorithm.
///
/// # Arguments
///
/// * `num_str` - A string slice containing only digits.
///
/// # Returns
///
/// `true` if the number is valid according to the Luhn algorithm, `false` otherwise.
pub fn is_valid_luhn(num_str: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Strips every non-digit character and applies the Luhn algorithm.
///
/// Returns `false` for input without any digits.
pub fn is_valid_credit_card_programmatically(cc_number: &str) -> bool {
    let digits: String = cc_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    is_valid_luhn(&digits)
}

/// Validates a CPF (Cadastro de Pessoas Físicas) number.
///
/// Requires exactly 11 digits, rejects numbers made of a single repeated digit,
/// and verifies both mod-11 check digits.
pub fn is_valid_cpf(cpf: &str) -> bool {
    const CPF_LENGTH: usize = 11;

    let digits = digits_of(cpf);
    if digits.len() != CPF_LENGTH || all_same(&digits) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let weight_start = len as u32 + 1;
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        (sum * 10 % 11) % 10
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// Validates a CNPJ (Cadastro Nacional da Pessoa Jurídica) number.
///
/// Requires exactly 14 digits, rejects numbers made of a single repeated digit,
/// and verifies both weighted mod-11 check digits.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    const CNPJ_LENGTH: usize = 14;
    const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let digits = digits_of(cnpj);
    if digits.len() != CNPJ_LENGTH || all_same(&digits) {
        return false;
    }

    let check_digit = |weights: &[u32]| -> u32 {
        let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    };

    check_digit(&FIRST_WEIGHTS) == digits[12] && check_digit(&SECOND_WEIGHTS) == digits[13]
}
