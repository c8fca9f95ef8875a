//! FIX 4.4 enumerated field values.
//!
//! Each enum serializes as its FIX wire code so a message assembler can copy it into a
//! tag-value pair unchanged. Only the values this crate produces are modeled.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! fix_code_display {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_fix_str())
            }
        }
    };
}

/// OrdStatus (39).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrdStatus {
    #[serde(rename = "0")]
    New,
    #[serde(rename = "1")]
    PartiallyFilled,
    #[serde(rename = "2")]
    Filled,
    #[serde(rename = "4")]
    Canceled,
}

impl OrdStatus {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            OrdStatus::New => "0",
            OrdStatus::PartiallyFilled => "1",
            OrdStatus::Filled => "2",
            OrdStatus::Canceled => "4",
        }
    }
}

/// ExecType (150), FIX 4.1+ semantics (ExecTransType folded in).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecType {
    #[serde(rename = "0")]
    New,
    #[serde(rename = "4")]
    Canceled,
    #[serde(rename = "F")]
    Trade,
    /// Status report with no new event on the order.
    #[serde(rename = "I")]
    OrderStatus,
}

impl ExecType {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            ExecType::New => "0",
            ExecType::Canceled => "4",
            ExecType::Trade => "F",
            ExecType::OrderStatus => "I",
        }
    }
}

/// OrdType (40).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrdType {
    #[serde(rename = "1")]
    Market,
    #[serde(rename = "2")]
    Limit,
    #[serde(rename = "3")]
    Stop,
    #[serde(rename = "4")]
    StopLimit,
}

impl OrdType {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            OrdType::Market => "1",
            OrdType::Limit => "2",
            OrdType::Stop => "3",
            OrdType::StopLimit => "4",
        }
    }

    /// True when the order carries a limit price (Price, 44).
    pub fn has_limit_price(self) -> bool {
        matches!(self, OrdType::Limit | OrdType::StopLimit)
    }

    /// True when the order carries a trigger price (StopPx, 99).
    pub fn has_stop_price(self) -> bool {
        matches!(self, OrdType::Stop | OrdType::StopLimit)
    }
}

/// TimeInForce (59).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    #[serde(rename = "1")]
    GoodTillCancel,
    #[serde(rename = "4")]
    FillOrKill,
    #[serde(rename = "6")]
    GoodTillDate,
}

impl TimeInForce {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            TimeInForce::GoodTillCancel => "1",
            TimeInForce::FillOrKill => "4",
            TimeInForce::GoodTillDate => "6",
        }
    }
}

/// Side (54).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "1")]
    Buy,
    #[serde(rename = "2")]
    Sell,
    #[serde(rename = "7")]
    Undisclosed,
}

impl Side {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            Side::Buy => "1",
            Side::Sell => "2",
            Side::Undisclosed => "7",
        }
    }
}

/// DisplayMethod (1084).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMethod {
    #[serde(rename = "4")]
    Undisclosed,
}

impl DisplayMethod {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            DisplayMethod::Undisclosed => "4",
        }
    }
}

/// MDUpdateAction (279).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MdUpdateAction {
    #[serde(rename = "0")]
    New,
    #[serde(rename = "2")]
    Delete,
}

impl MdUpdateAction {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            MdUpdateAction::New => "0",
            MdUpdateAction::Delete => "2",
        }
    }
}

/// MDEntryType (269), book sides only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MdEntryType {
    #[serde(rename = "0")]
    Bid,
    #[serde(rename = "1")]
    Offer,
}

impl MdEntryType {
    pub fn as_fix_str(self) -> &'static str {
        match self {
            MdEntryType::Bid => "0",
            MdEntryType::Offer => "1",
        }
    }
}

fix_code_display!(OrdStatus);
fix_code_display!(ExecType);
fix_code_display!(OrdType);
fix_code_display!(TimeInForce);
fix_code_display!(Side);
fix_code_display!(DisplayMethod);
fix_code_display!(MdUpdateAction);
fix_code_display!(MdEntryType);

/// One ExecInst (18) code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecInstCode {
    PrimaryPeg,
    ParticipantDontInitiate,
}

impl ExecInstCode {
    pub fn as_fix_char(self) -> char {
        match self {
            ExecInstCode::PrimaryPeg => 'R',
            ExecInstCode::ParticipantDontInitiate => '6',
        }
    }

    fn from_fix_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(ExecInstCode::PrimaryPeg),
            '6' => Some(ExecInstCode::ParticipantDontInitiate),
            _ => None,
        }
    }
}

/// ExecInst (18): one or more codes, concatenated on the wire in insertion order.
///
/// Never empty. "No instruction" is `Option::<ExecInst>::None` at the call site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ExecInst(Vec<ExecInstCode>);

impl ExecInst {
    /// Builds from a list of codes. Returns `None` for an empty list.
    pub fn from_codes(codes: Vec<ExecInstCode>) -> Option<Self> {
        if codes.is_empty() {
            None
        } else {
            Some(Self(codes))
        }
    }

    pub fn codes(&self) -> &[ExecInstCode] {
        &self.0
    }

    pub fn contains(&self, code: ExecInstCode) -> bool {
        self.0.contains(&code)
    }
}

impl fmt::Display for ExecInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in &self.0 {
            write!(f, "{}", code.as_fix_char())?;
        }
        Ok(())
    }
}

impl From<ExecInst> for String {
    fn from(e: ExecInst) -> String {
        e.to_string()
    }
}

impl TryFrom<String> for ExecInst {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let codes = s
            .chars()
            .map(|c| ExecInstCode::from_fix_char(c).ok_or_else(|| format!("unknown ExecInst code {:?}", c)))
            .collect::<Result<Vec<_>, _>>()?;
        ExecInst::from_codes(codes).ok_or_else(|| "empty ExecInst".to_string())
    }
}
