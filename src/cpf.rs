//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is an 11-digit identifier: 9 base digits followed by 2 check
//! digits derived under Brazil's modulo-11 scheme. The validator accepts
//! bare digits or the punctuated display format (`XXX.XXX.XXX-XX`),
//! rejects the ten all-repeated-digit sequences that pass the checksum but
//! are never issued, and recomputes both check digits for verification.

use serde::{Deserialize, Serialize};

/// CPF validation failures.
///
/// Each variant carries the user-facing message the form layer renders
/// verbatim next to the CPF field. The first applicable failure wins;
/// checks are never aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CpfError {
    /// Known-bogus repeated-digit sequence, or check-digit mismatch.
    #[error("CPF inválido.")]
    Invalid,
    /// Non-digit characters remain after stripping `.` and `-`.
    #[error("Este campo aceita somente números.")]
    DigitsOnly,
    /// Wrong length after stripping punctuation. Historical name: the
    /// original message talks about a maximum, but the check is exact.
    #[error("Este campo aceita no máximo 11 dígitos.")]
    MaxDigits,
}

/// Validated CPF (11 digits, check digits verified).
///
/// Guaranteed valid by construction: holding a `Cpf` proves the checksum
/// is correct. Use `"11144477735".parse::<Cpf>()` or `Cpf::try_from(string)`
/// to create one; both accept the punctuated form and store the stripped
/// 11-digit value. An *optional* CPF field goes through [`validate_cpf`],
/// which maps empty input to `None` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cpf {
    type Err = CpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_candidate(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_candidate(&s)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Validates an optional CPF field value.
///
/// Empty or whitespace-only input is acceptable (an unset CPF) and returns
/// `Ok(None)`. Anything else runs the full pipeline: punctuation stripping,
/// repeated-sequence rejection, digit and length checks, then check-digit
/// verification. On success the returned [`Cpf`] holds the stripped input
/// unchanged; the recomputed digits are used only for comparison.
///
/// # Errors
///
/// Returns the first applicable [`CpfError`].
pub fn validate_cpf(raw: &str) -> Result<Option<Cpf>, CpfError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_candidate(raw).map(Some)
}

fn parse_candidate(raw: &str) -> Result<Cpf, CpfError> {
    // Concession to the punctuated display format: strip dash and period,
    // nothing else.
    let candidate: String = raw.chars().filter(|c| *c != '.' && *c != '-').collect();

    // Sequences like "11111111111" satisfy the checksum but are never
    // legitimately issued. Exactly these ten are rejected.
    if is_repeated_sequence(&candidate) {
        return Err(CpfError::Invalid);
    }
    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CpfError::DigitsOnly);
    }
    if candidate.len() != 11 {
        return Err(CpfError::MaxDigits);
    }

    let digits: Vec<u8> = candidate.bytes().map(|b| b - b'0').collect();
    let first = check_digit(&digits[..9]);
    let mut with_first = digits[..9].to_vec();
    with_first.push(first);
    let second = check_digit(&with_first);
    if digits[9] != first || digits[10] != second {
        return Err(CpfError::Invalid);
    }

    Ok(Cpf(candidate))
}

fn is_repeated_sequence(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 11 && bytes[0].is_ascii_digit() && bytes.iter().all(|b| *b == bytes[0])
}

/// Modulo-11 check digit over `digits`, weighted `len + 1` down to `2`
/// left to right. A remainder below 2 maps to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}
