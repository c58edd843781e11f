pub const CPF_LEN: usize = 11;
pub const CNPJ_LEN: usize = 14;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    Cpf,
    Cnpj,
}

/// Keeps only the ASCII digits of a CPF/CNPJ as typed by the user.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn tax_id_kind(value: &str) -> Option<TaxIdKind> {
    match digits_only(value).len() {
        CPF_LEN => Some(TaxIdKind::Cpf),
        CNPJ_LEN => Some(TaxIdKind::Cnpj),
        _ => None,
    }
}

/// Validates a CPF (11 digits) or CNPJ (14 digits) check digits. Punctuation is ignored.
pub fn validate_cpf_cnpj(value: &str) -> bool {
    let digits = to_digits(value);
    match digits.len() {
        CPF_LEN => validate_cpf(&digits),
        CNPJ_LEN => validate_cnpj(&digits),
        _ => false,
    }
}

/// Progressive display mask: `529.982.247-25` for CPF, `11.222.333/0001-81` for CNPJ.
pub fn mask_cpf_cnpj(value: &str) -> String {
    let digits: Vec<char> = value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CNPJ_LEN)
        .collect();

    let separators: &[(usize, char)] = if digits.len() <= CPF_LEN {
        &[(3, '.'), (6, '.'), (9, '-')]
    } else {
        &[(2, '.'), (5, '.'), (8, '/'), (12, '-')]
    };

    let mut masked = String::with_capacity(digits.len() + separators.len());
    for (index, digit) in digits.iter().enumerate() {
        if let Some((_, separator)) = separators.iter().find(|(at, _)| *at == index) {
            masked.push(*separator);
        }
        masked.push(*digit);
    }
    masked
}

fn to_digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn validate_cpf(digits: &[u32]) -> bool {
    if all_same(digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

// Weights run from len + 1 down to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (top - i as u32))
        .sum();
    let check = 11 - sum % 11;
    if check >= 10 { 0 } else { check }
}

fn validate_cnpj(digits: &[u32]) -> bool {
    if all_same(digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS) == digits[13]
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
