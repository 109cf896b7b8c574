use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use boxoffice_core::{PurchaseError, PurchaseResult, ValueObject};

/// Ticket type: determines price and seat allocation.
///
/// Closed enumeration; the wire literals are the exact uppercase strings
/// `INFANT` / `CHILD` / `ADULT` with no case folding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Price of one ticket, in whole pounds. Infants travel free.
    pub fn price(self) -> u64 {
        match self {
            TicketType::Infant => 0,
            TicketType::Child => 10,
            TicketType::Adult => 20,
        }
    }

    /// Seats occupied by one ticket of this type.
    ///
    /// Infants are seated on an adult's lap and never occupy a seat.
    pub fn seats_per_ticket(self) -> u64 {
        match self {
            TicketType::Infant => 0,
            TicketType::Child | TicketType::Adult => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        }
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFANT" => Ok(TicketType::Infant),
            "CHILD" => Ok(TicketType::Child),
            "ADULT" => Ok(TicketType::Adult),
            _ => Err(PurchaseError::InvalidTicketType),
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for N tickets of one type.
///
/// Immutable value object: both attributes are fixed at construction and only
/// read-only accessors exist. The typed constructor is total (the enum is the
/// closed type enumeration and `i64` is the integer predicate), while the
/// raw constructors reject anything that is not exactly a known type literal
/// plus a native integer count. Positivity of the count is deliberately not
/// checked here; it depends on aggregate context and is enforced by the
/// purchase pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: i64,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Construct from untyped boundary values.
    ///
    /// The type must be a string exactly equal to one of the three literals;
    /// the count must be a native JSON integer. Booleans, floats, and every
    /// other non-integer value fail the count check; no numeric coercion is
    /// ever invoked.
    pub fn from_raw(ticket_type: &Value, no_of_tickets: &Value) -> PurchaseResult<Self> {
        let ticket_type = ticket_type
            .as_str()
            .ok_or(PurchaseError::InvalidTicketType)?
            .parse::<TicketType>()?;
        let no_of_tickets = no_of_tickets
            .as_i64()
            .ok_or(PurchaseError::NonIntegerTicketQuantity)?;
        Ok(Self::new(ticket_type, no_of_tickets))
    }

    /// Decode one element of an untyped request list.
    ///
    /// Expects a `{"ticket_type": ..., "no_of_tickets": ...}` object. Any
    /// failure (wrong JSON type, missing field, unknown type literal,
    /// non-integer count) means the element is not a ticket request,
    /// regardless of its apparent shape.
    pub fn from_value(value: &Value) -> PurchaseResult<Self> {
        let object = value.as_object().ok_or(PurchaseError::NotATicketRequest)?;
        let ticket_type = object
            .get("ticket_type")
            .ok_or(PurchaseError::NotATicketRequest)?;
        let no_of_tickets = object
            .get("no_of_tickets")
            .ok_or(PurchaseError::NotATicketRequest)?;
        Self::from_raw(ticket_type, no_of_tickets).map_err(|_| PurchaseError::NotATicketRequest)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> i64 {
        self.no_of_tickets
    }
}

impl ValueObject for TicketTypeRequest {}
