//! Parsed command models: field destinations, item drafts, and the
//! parse outcome returned to the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of value a destination expects, driving normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Verbatim text (already lowercased with the transcript).
    Text,
    /// Spoken email address ("jay at gmail dot com").
    Email,
    /// Natural-language calendar date, normalized to `YYYY-MM-DD`.
    Date,
    /// Numeric value; the first number in the value is used.
    Number,
}

/// Destination path for a global (non-item) field update.
///
/// Serializes as the dotted path string (`"client.email"`), which is
/// how consumers key their nested invoice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldPath {
    /// Business name.
    #[serde(rename = "sender.name")]
    SenderName,
    /// Business email address.
    #[serde(rename = "sender.email")]
    SenderEmail,
    /// Business address.
    #[serde(rename = "sender.address")]
    SenderAddress,
    /// Business phone number.
    #[serde(rename = "sender.phone")]
    SenderPhone,
    /// Business tax / GST id.
    #[serde(rename = "sender.taxId")]
    SenderTaxId,
    /// Client name.
    #[serde(rename = "client.name")]
    ClientName,
    /// Client company name.
    #[serde(rename = "client.company")]
    ClientCompany,
    /// Client billing address.
    #[serde(rename = "client.address")]
    ClientAddress,
    /// Client email address.
    #[serde(rename = "client.email")]
    ClientEmail,
    /// Client GSTIN.
    #[serde(rename = "client.taxId")]
    ClientTaxId,
    /// Invoice number.
    #[serde(rename = "meta.number")]
    MetaNumber,
    /// Invoice issue date.
    #[serde(rename = "meta.date")]
    MetaDate,
    /// Payment due date.
    #[serde(rename = "meta.dueDate")]
    MetaDueDate,
    /// Invoice currency.
    #[serde(rename = "meta.currency")]
    MetaCurrency,
    /// Payment details / notes.
    #[serde(rename = "payment.details")]
    PaymentDetails,
    /// Invoice template.
    #[serde(rename = "global.template")]
    GlobalTemplate,
    /// Tax type (IGST vs. CGST+SGST).
    #[serde(rename = "global.taxType")]
    GlobalTaxType,
    /// Round-off setting.
    #[serde(rename = "global.roundOff")]
    GlobalRoundOff,
    /// Discount type (percent vs. flat).
    #[serde(rename = "global.discountType")]
    GlobalDiscountType,
    /// Discount value.
    #[serde(rename = "global.discount")]
    GlobalDiscount,
}

impl FieldPath {
    /// The dotted path string consumers key their nested record by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SenderName => "sender.name",
            Self::SenderEmail => "sender.email",
            Self::SenderAddress => "sender.address",
            Self::SenderPhone => "sender.phone",
            Self::SenderTaxId => "sender.taxId",
            Self::ClientName => "client.name",
            Self::ClientCompany => "client.company",
            Self::ClientAddress => "client.address",
            Self::ClientEmail => "client.email",
            Self::ClientTaxId => "client.taxId",
            Self::MetaNumber => "meta.number",
            Self::MetaDate => "meta.date",
            Self::MetaDueDate => "meta.dueDate",
            Self::MetaCurrency => "meta.currency",
            Self::PaymentDetails => "payment.details",
            Self::GlobalTemplate => "global.template",
            Self::GlobalTaxType => "global.taxType",
            Self::GlobalRoundOff => "global.roundOff",
            Self::GlobalDiscountType => "global.discountType",
            Self::GlobalDiscount => "global.discount",
        }
    }

    /// The `(section, field)` pair consumers use to merge an update
    /// into a two-level nested record.
    pub fn parts(&self) -> (&'static str, &'static str) {
        self.as_str()
            .split_once('.')
            .unwrap_or((self.as_str(), ""))
    }

    /// Top-level bucket of the destination (`"client"` in `"client.email"`).
    pub fn section(&self) -> &'static str {
        self.parts().0
    }

    /// Field name within the section (`"email"` in `"client.email"`).
    pub fn field(&self) -> &'static str {
        self.parts().1
    }

    /// The kind of value this destination expects.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::SenderEmail | Self::ClientEmail => ValueKind::Email,
            Self::MetaDate | Self::MetaDueDate => ValueKind::Date,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field of a dictated line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    /// Item description.
    Description,
    /// HSN/SAC code.
    Hsn,
    /// Quantity.
    Quantity,
    /// Unit price / rate.
    Price,
    /// IGST percentage.
    Igst,
    /// CGST percentage.
    Cgst,
    /// SGST percentage.
    Sgst,
    /// Line total. Recognized so its text never bleeds into a
    /// neighboring value, but dropped at assembly (totals are derived
    /// by the consumer).
    Total,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Hsn => "hsn",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Igst => "igst",
            Self::Cgst => "cgst",
            Self::Sgst => "sgst",
            Self::Total => "total",
        }
    }

    /// The kind of value this field expects.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Quantity | Self::Price | Self::Igst | Self::Cgst | Self::Sgst => {
                ValueKind::Number
            }
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dictated line item, normalized but not yet a full invoice row.
///
/// The caller merges drafts into its line-item list, assigning display
/// ids of its own; `id` is only unique within one parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Position of the item within this parse call (1-based).
    pub id: u64,

    /// Item description (defaults to "New Item").
    pub description: String,

    /// HSN/SAC code (defaults to empty).
    #[serde(default)]
    pub hsn: String,

    /// Quantity (defaults to 1).
    pub quantity: f64,

    /// Unit price (defaults to 0).
    pub price: f64,

    /// IGST percentage (defaults to 0).
    pub igst: f64,

    /// CGST percentage (defaults to 0).
    pub cgst: f64,

    /// SGST percentage (defaults to 0).
    pub sgst: f64,
}

/// Result of parsing one voice-command transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Global field updates, keyed by destination path.
    pub updates: BTreeMap<FieldPath, String>,

    /// Newly dictated line items, in dictation order.
    pub new_items: Vec<ItemDraft>,
}

impl ParseOutcome {
    /// True when nothing was recognized: no field updates and no items.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.new_items.is_empty()
    }
}
