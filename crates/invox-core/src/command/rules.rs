//! Trigger rule tables mapping spoken phrases to destinations.
//!
//! The built-in tables cover every label of the invoice form: business
//! and client details, invoice metadata, payment notes, and the
//! per-item fields. Synonym phrases account for how speech-to-text
//! renders the same label ("email", "e-mail", "e mail").

use lazy_static::lazy_static;

use crate::error::RuleError;
use crate::models::command::{FieldPath, ItemField, ValueKind};

/// A destination a trigger rule can write to.
pub trait Destination: Copy + Eq + Ord + std::fmt::Display {
    /// Output key for this destination (dotted path or field name).
    fn key(&self) -> &'static str;

    /// The kind of value this destination expects.
    fn kind(&self) -> ValueKind;
}

impl Destination for FieldPath {
    fn key(&self) -> &'static str {
        self.as_str()
    }

    fn kind(&self) -> ValueKind {
        FieldPath::kind(self)
    }
}

impl Destination for ItemField {
    fn key(&self) -> &'static str {
        self.as_str()
    }

    fn kind(&self) -> ValueKind {
        ItemField::kind(self)
    }
}

/// One rule: a set of synonym trigger phrases and their destination.
#[derive(Debug, Clone)]
pub struct TriggerRule<D> {
    /// Lowercase trigger phrases that introduce this field's value.
    pub triggers: Vec<String>,
    /// Where the extracted value is written.
    pub destination: D,
}

impl<D> TriggerRule<D> {
    pub fn new(destination: D, triggers: &[&str]) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            destination,
        }
    }
}

/// A validated table of trigger rules.
///
/// Within one table each destination appears at most once; a rule may
/// list any number of synonym phrases.
#[derive(Debug, Clone)]
pub struct RuleTable<D> {
    rules: Vec<TriggerRule<D>>,
}

impl<D: Destination> RuleTable<D> {
    /// Build a table, rejecting duplicate destinations and blank phrases.
    pub fn new(rules: Vec<TriggerRule<D>>) -> Result<Self, RuleError> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.triggers.is_empty() {
                return Err(RuleError::NoPhrases {
                    destination: rule.destination.to_string(),
                });
            }
            if rule.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(RuleError::EmptyPhrase {
                    destination: rule.destination.to_string(),
                });
            }
            if rules[..i].iter().any(|r| r.destination == rule.destination) {
                return Err(RuleError::DuplicateDestination {
                    destination: rule.destination.to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[TriggerRule<D>] {
        &self.rules
    }
}

lazy_static! {
    static ref GLOBAL_RULES: RuleTable<FieldPath> = RuleTable::new(vec![
        // Business details
        TriggerRule::new(FieldPath::SenderName, &["business name", "my business"]),
        TriggerRule::new(
            FieldPath::SenderEmail,
            &[
                "email",
                "e-mail",
                "e mail",
                "email address",
                "business email",
                "my email",
                "contact email",
            ],
        ),
        TriggerRule::new(
            FieldPath::SenderAddress,
            &["business address", "my address", "office address"],
        ),
        TriggerRule::new(FieldPath::SenderPhone, &["phone number", "contact number"]),
        TriggerRule::new(FieldPath::SenderTaxId, &["tax id", "gst id", "gstin"]),
        TriggerRule::new(FieldPath::GlobalTemplate, &["template"]),
        // Client details
        TriggerRule::new(FieldPath::ClientName, &["client name"]),
        TriggerRule::new(FieldPath::ClientCompany, &["company name", "client company"]),
        TriggerRule::new(
            FieldPath::ClientAddress,
            &["client address", "billing address"],
        ),
        TriggerRule::new(
            FieldPath::ClientEmail,
            &[
                "client email",
                "customer email",
                "client email address",
                "customer email address",
                "client's email",
                "clients email",
                "billing email",
                "client mail",
                "customer mail",
            ],
        ),
        TriggerRule::new(
            FieldPath::ClientTaxId,
            &["client gstin", "client tax", "customer gst"],
        ),
        // Invoice meta
        TriggerRule::new(
            FieldPath::MetaNumber,
            &["number", "invoice number", "invoice no"],
        ),
        TriggerRule::new(FieldPath::MetaDate, &["date", "issue date", "invoice date"]),
        TriggerRule::new(FieldPath::MetaDueDate, &["due date"]),
        TriggerRule::new(FieldPath::MetaCurrency, &["currency"]),
        // Totals / globals
        TriggerRule::new(FieldPath::GlobalTaxType, &["tax type"]),
        TriggerRule::new(FieldPath::GlobalRoundOff, &["round off"]),
        TriggerRule::new(FieldPath::PaymentDetails, &["payment details", "notes"]),
        TriggerRule::new(FieldPath::GlobalDiscountType, &["discount type"]),
        TriggerRule::new(FieldPath::GlobalDiscount, &["discount"]),
    ])
    .expect("built-in global rule table is valid");

    static ref ITEM_RULES: RuleTable<ItemField> = RuleTable::new(vec![
        TriggerRule::new(ItemField::Description, &["description", "item description"]),
        TriggerRule::new(ItemField::Hsn, &["hsn", "sac", "hsn/sac"]),
        TriggerRule::new(ItemField::Quantity, &["quantity", "qty"]),
        TriggerRule::new(ItemField::Price, &["price", "rate"]),
        TriggerRule::new(ItemField::Igst, &["igst %", "igst"]),
        TriggerRule::new(ItemField::Cgst, &["cgst %", "cgst"]),
        TriggerRule::new(ItemField::Sgst, &["sgst %", "sgst"]),
        TriggerRule::new(ItemField::Total, &["total"]),
    ])
    .expect("built-in item rule table is valid");
}

/// The built-in rule table for global (non-item) fields.
pub fn global_rules() -> &'static RuleTable<FieldPath> {
    &GLOBAL_RULES
}

/// The built-in rule table for dictated line items.
pub fn item_rules() -> &'static RuleTable<ItemField> {
    &ITEM_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        assert_eq!(global_rules().rules().len(), 20);
        assert_eq!(item_rules().rules().len(), 8);
    }

    #[test]
    fn test_duplicate_destination_rejected() {
        let err = RuleTable::new(vec![
            TriggerRule::new(ItemField::Price, &["price"]),
            TriggerRule::new(ItemField::Price, &["rate"]),
        ])
        .unwrap_err();

        assert!(matches!(err, RuleError::DuplicateDestination { .. }));
    }

    #[test]
    fn test_blank_phrase_rejected() {
        let err = RuleTable::new(vec![TriggerRule::new(ItemField::Hsn, &["hsn", "  "])])
            .unwrap_err();

        assert!(matches!(err, RuleError::EmptyPhrase { .. }));
    }

    #[test]
    fn test_phrases_are_lowercased() {
        let table =
            RuleTable::new(vec![TriggerRule::new(ItemField::Hsn, &["HSN"])]).unwrap();
        assert_eq!(table.rules()[0].triggers[0], "hsn");
    }
}
