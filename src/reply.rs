//! Literal reply text. Amounts render as integers truncated toward zero
//! (`12.99` shows as `12`), dates as `DD/MM/YYYY`, matching the historical
//! bot output.

use chrono::NaiveDateTime;

use crate::errors::{EngineError, ParseError, StoreError};
use crate::ledger::Expense;
use crate::report::Summary;

const ADD_SYNTAX: &str = "'Dépense: [Description] - [Montant] - [Catégorie] - [Date]'";
const DATE_SYNTAX: &str = "AAAA-MM-JJ, JJ mois AAAA, JJ/MM/AAAA ou AAAA/MM/JJ";
const REPORT_SYNTAX: &str =
    "'Rapport semaine', 'Rapport mois avril' ou 'Rapport date 2025-04-01 à 2025-04-30'";

/// Renders engine results into user-facing text.
pub struct ReplyFormatter {
    currency: String,
}

impl ReplyFormatter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn greeting(&self) -> String {
        format!(
            "Bonjour ! Envoyez vos dépenses au format suivant :\n{ADD_SYNTAX}\n\
             Autres commandes : 'Liste', 'Total', 'Annuler', 'Supprimer N', \
             'Modifier N - [Montant] - [Catégorie]', 'Rapport ...'"
        )
    }

    pub fn unknown(&self, suggestion: Option<&str>) -> String {
        let mut reply = String::from(
            "Commande non reconnue. Essayez 'Bonjour', 'Liste', 'Total', 'Dépense: ...', \
             'Annuler', 'Supprimer N', 'Modifier N - ...' ou 'Rapport ...'.",
        );
        if let Some(keyword) = suggestion {
            reply.push_str(&format!("\nVouliez-vous dire '{keyword}' ?"));
        }
        reply
    }

    pub fn empty_ledger(&self) -> String {
        "Aucune dépense enregistrée pour le moment.".to_string()
    }

    pub fn list(&self, summary: &Summary) -> String {
        let mut reply = String::from("Voici vos dernières dépenses :");
        for (offset, expense) in summary.recent.iter().enumerate() {
            reply.push('\n');
            reply.push_str(&self.numbered_line(summary.offset + offset, expense));
        }
        reply
    }

    pub fn total(&self, total: f64) -> String {
        format!(
            "Le montant total des dépenses est de **{} {}**.",
            truncate(total),
            self.currency
        )
    }

    pub fn added(&self, expense: &Expense) -> String {
        format!(
            "Dépense enregistrée avec succès !\n{} - {} {} ({})",
            expense.description,
            truncate(expense.amount),
            self.currency,
            expense.category
        )
    }

    pub fn cancelled(&self, expense: &Expense) -> String {
        format!(
            "Dernière dépense annulée : {} - {} {} ({})",
            expense.description,
            truncate(expense.amount),
            self.currency,
            expense.category
        )
    }

    pub fn deleted(&self, index: usize, expense: &Expense) -> String {
        format!(
            "Dépense n°{index} supprimée : {} - {} {} ({})",
            expense.description,
            truncate(expense.amount),
            self.currency,
            expense.category
        )
    }

    pub fn modified(&self, index: usize, expense: &Expense) -> String {
        format!(
            "Dépense n°{index} modifiée : {} - {} {} ({})",
            expense.description,
            truncate(expense.amount),
            self.currency,
            expense.category
        )
    }

    pub fn report(&self, period: &str, summary: &Summary) -> String {
        if summary.recent.is_empty() {
            return format!("Aucune dépense pour la période « {period} ».");
        }
        let mut reply = format!(
            "Rapport ({period}) :\nTotal : {} {}",
            truncate(summary.total),
            self.currency
        );
        // Report lines are unnumbered: positions within a filtered subset
        // are not valid targets for 'Supprimer'/'Modifier'.
        for expense in &summary.recent {
            reply.push_str(&format!("\n- {}", self.line(expense)));
        }
        reply
    }

    pub fn save_failed(&self) -> String {
        "Impossible d'enregistrer les dépenses. Réessayez plus tard.".to_string()
    }

    /// Maps an error to the guidance reply echoing the correct syntax.
    pub fn guidance(&self, err: &EngineError) -> String {
        match err {
            EngineError::Parse(ParseError::UnknownCommand(_)) => self.unknown(None),
            EngineError::Parse(ParseError::Date(_)) => {
                format!("Date non reconnue. Formats acceptés : {DATE_SYNTAX}.")
            }
            EngineError::Parse(ParseError::InvalidIndex(_)) => {
                "Numéro invalide. Utilisez : 'Supprimer N' ou \
                 'Modifier N - [Montant] - [Catégorie]'."
                    .to_string()
            }
            EngineError::Parse(_) => {
                format!("Format incorrect. Veuillez utiliser : {ADD_SYNTAX}")
            }
            EngineError::Period(_) => {
                format!("Période non reconnue. Essayez : {REPORT_SYNTAX}.")
            }
            EngineError::Store(StoreError::OutOfBounds { index, len }) => {
                format!("Aucune dépense n°{index} (le carnet en contient {len}).")
            }
            EngineError::Store(_) => self.save_failed(),
        }
    }

    fn numbered_line(&self, index: usize, expense: &Expense) -> String {
        format!("{index}. {}", self.line(expense))
    }

    fn line(&self, expense: &Expense) -> String {
        format!(
            "{} - {} - {} {} ({})",
            format_date(expense.date),
            expense.description,
            truncate(expense.amount),
            self.currency,
            expense.category
        )
    }
}

fn format_date(date: NaiveDateTime) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Truncation toward zero, never rounding.
fn truncate(amount: f64) -> i64 {
    amount.trunc() as i64
}
