//! Localized message tables for the event form.

use serde::{Deserialize, Serialize};

use super::types::Field;

/// Message locale. Brazilian Portuguese is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

/// Every user-visible string of the form for one locale.
#[derive(Debug)]
pub struct Messages {
    pub eventname_too_short: &'static str,
    pub local_too_short: &'static str,
    pub invalid_date: &'static str,
    pub hour_too_short: &'static str,
    pub description_too_short: &'static str,
    pub created: &'static str,
    pub failure_prefix: &'static str,
    pub unknown_failure: &'static str,
    pub organizer_label: &'static str,
    labels: [&'static str; 5],
    placeholders: [&'static str; 5],
}

const PT_BR: Messages = Messages {
    eventname_too_short: "O nome da página deve ter pelo menos 2 caracteres",
    local_too_short: "Digite um local válido",
    invalid_date: "Por favor, insira uma data",
    hour_too_short: "Digite um horário válido",
    description_too_short: "A descrição da página deve ter pelo menos 10 caracteres",
    created: "Evento criado com sucesso!",
    failure_prefix: "Erro ao criar o evento:",
    unknown_failure: "Erro desconhecido ao criar o evento",
    organizer_label: "Organizador",
    labels: ["Nome do evento", "Local", "Data", "Hora", "Descrição"],
    placeholders: [
        "Escreva o nome do evento",
        "Insira um local para seu evento",
        "Escolha uma data",
        "16:20",
        "Faça uma descrição sobre seu evento",
    ],
};

const EN: Messages = Messages {
    eventname_too_short: "Event name must be at least 2 characters",
    local_too_short: "Enter a valid location",
    invalid_date: "Please enter a date",
    hour_too_short: "Enter a valid time",
    description_too_short: "Description must be at least 10 characters",
    created: "Event created successfully!",
    failure_prefix: "Failed to create event:",
    unknown_failure: "Unknown error while creating the event",
    organizer_label: "Organizer",
    labels: ["Event name", "Location", "Date", "Time", "Description"],
    placeholders: [
        "Write the event name",
        "Where is your event",
        "Pick a date (YYYY-MM-DD)",
        "16:20",
        "Describe your event",
    ],
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }

    /// Locale tag as written in configuration (`pt-BR`, `en`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl Messages {
    /// Field label shown next to the input.
    pub fn label(&self, field: Field) -> &'static str {
        self.labels[field_index(field)]
    }

    /// Example text shown in an empty input.
    pub fn placeholder(&self, field: Field) -> &'static str {
        self.placeholders[field_index(field)]
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Eventname => 0,
        Field::Local => 1,
        Field::Date => 2,
        Field::Hour => 3,
        Field::Description => 4,
    }
}
