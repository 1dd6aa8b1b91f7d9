//! User accounts and Brazilian identity documents.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::cpf::Cpf;

/// User identifier (ULID format).
///
/// Immutable, unique per account. Consumers store this as the sole link to
/// a SIGME user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct UserId(pub Ulid);

/// A SIGME user account.
///
/// The CPF is optional; when present it is guaranteed valid by construction
/// of [`Cpf`]. Deserializing a record with a bogus CPF fails at the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<Cpf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_document: Option<IdentityDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_uid: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Identity document accepted for registration alongside (or instead of)
/// a CPF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    pub kind: IdentityDocumentKind,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<BrazilianState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

/// Document kinds accepted as identity proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityDocumentKind {
    #[serde(rename = "ID_MILITAR")]
    MilitaryId,
    #[serde(rename = "RG")]
    Rg,
    #[serde(rename = "CARTEIRA")]
    ProfessionalBodyCard,
    #[serde(rename = "PASSAPORTE")]
    Passport,
    #[serde(rename = "CARTEIRA_MIN_PUBLICO")]
    PublicMinistryCard,
    #[serde(rename = "RESERVISTA")]
    ReservistCertificate,
    #[serde(rename = "CARTEIRA_FUNCIONAL")]
    PublicAgencyCard,
    #[serde(rename = "CTPS")]
    Ctps,
    #[serde(rename = "CNH")]
    Cnh,
}

impl IdentityDocumentKind {
    /// Full document name as shown in registration forms.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::MilitaryId => "Carteira de Identidade Militar (RA, RE, RM)",
            Self::Rg => "Carteira de Identidade Civil (RG)",
            Self::ProfessionalBodyCard => {
                "Carteira de Identificação de Órgão Fiscalizador (Ordens, Conselhos, etc)"
            }
            Self::Passport => "Passaporte",
            Self::PublicMinistryCard => "Carteira Funcional do Ministério Público",
            Self::ReservistCertificate => "Certificado de Reservista",
            Self::PublicAgencyCard => "Carteira Funcional Expedida por Órgão Público",
            Self::Ctps => "Carteira de Trabalho e Previdência Social",
            Self::Cnh => "Carteira Nacional de Habilitação",
        }
    }
}

/// Brazilian federative units, identified by their two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum BrazilianState {
    AC, AL, AP, AM, BA, CE, DF, ES, GO, MA, MT, MS, MG, PA,
    PB, PR, PE, PI, RJ, RN, RS, RO, RR, SC, SP, SE, TO,
}

impl BrazilianState {
    pub const ALL: [Self; 27] = [
        Self::AC, Self::AL, Self::AP, Self::AM, Self::BA, Self::CE, Self::DF,
        Self::ES, Self::GO, Self::MA, Self::MT, Self::MS, Self::MG, Self::PA,
        Self::PB, Self::PR, Self::PE, Self::PI, Self::RJ, Self::RN, Self::RS,
        Self::RO, Self::RR, Self::SC, Self::SP, Self::SE, Self::TO,
    ];

    /// Two-letter federative unit code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AP => "AP",
            Self::AM => "AM",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MT => "MT",
            Self::MS => "MS",
            Self::MG => "MG",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PR => "PR",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RS => "RS",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::SC => "SC",
            Self::SP => "SP",
            Self::SE => "SE",
            Self::TO => "TO",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AC => "Acre",
            Self::AL => "Alagoas",
            Self::AP => "Amapá",
            Self::AM => "Amazonas",
            Self::BA => "Bahia",
            Self::CE => "Ceará",
            Self::DF => "Distrito Federal",
            Self::ES => "Espírito Santo",
            Self::GO => "Goiás",
            Self::MA => "Maranhão",
            Self::MT => "Mato Grosso",
            Self::MS => "Mato Grosso do Sul",
            Self::MG => "Minas Gerais",
            Self::PA => "Pará",
            Self::PB => "Paraíba",
            Self::PR => "Paraná",
            Self::PE => "Pernambuco",
            Self::PI => "Piauí",
            Self::RJ => "Rio de Janeiro",
            Self::RN => "Rio Grande do Norte",
            Self::RS => "Rio Grande do Sul",
            Self::RO => "Rondônia",
            Self::RR => "Roraima",
            Self::SC => "Santa Catarina",
            Self::SP => "São Paulo",
            Self::SE => "Sergipe",
            Self::TO => "Tocantins",
        }
    }
}

impl std::fmt::Display for BrazilianState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for BrazilianState {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == s)
            .ok_or_else(|| {
                crate::error::ValidationError::new("uf", format!("UF desconhecida: {s}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_serde_roundtrip() {
        let id = UserId(Ulid::nil());
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn user_with_cpf_roundtrip() {
        let user = User {
            id: UserId(Ulid::nil()),
            username: "msilva".into(),
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            cpf: Some("111.444.777-35".parse().unwrap()),
            identity_document: None,
            ldap_uid: None,
            active: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
        assert_eq!(parsed.cpf.unwrap().as_str(), "11144477735");
    }

    #[test]
    fn user_deserialization_rejects_bogus_cpf() {
        let json = r#"{
            "id": "00000000000000000000000000",
            "username": "msilva",
            "name": "Maria Silva",
            "email": "maria@example.com",
            "cpf": "11111111111"
        }"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn document_kind_codes_are_stable() {
        let kind = IdentityDocumentKind::Cnh;
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"CNH\"");
        assert_eq!(kind.description(), "Carteira Nacional de Habilitação");
        let parsed: IdentityDocumentKind = serde_json::from_str("\"ID_MILITAR\"").unwrap();
        assert_eq!(parsed, IdentityDocumentKind::MilitaryId);
    }

    #[test]
    fn state_code_parsing() {
        let state: BrazilianState = "SP".parse().unwrap();
        assert_eq!(state, BrazilianState::SP);
        assert_eq!(state.name(), "São Paulo");
        assert_eq!(state.to_string(), "SP");
        assert!("XX".parse::<BrazilianState>().is_err());
    }
}
