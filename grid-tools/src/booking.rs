//! Stay booking tools backed by the append-only booking store.

use std::sync::Arc;

use async_trait::async_trait;
use grid_bookings::{BookingRecord, BookingStore};
use serde_json::{Map, Value, json};

use crate::manifest::{OutputField, ParamSpec, ToolDefinition, ValueType};
use crate::registry::{Tool, ToolError, ToolRegistry, ToolResult};

/// Registered name of the booking tool.
pub const BOOK_STAY_TOOL: &str = "book_stay";

/// Registered name of the booking listing tool.
pub const LIST_BOOKINGS_TOOL: &str = "list_bookings";

/// Tool recording a stay reservation in the booking store.
#[derive(Debug, Clone)]
pub struct BookStayTool {
    store: Arc<BookingStore>,
}

impl BookStayTool {
    /// Creates the tool over the supplied store.
    #[must_use]
    pub fn new(store: Arc<BookingStore>) -> Self {
        Self { store }
    }

    /// Builds the tool definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidDefinition`] if the static definition
    /// fails validation.
    pub fn definition() -> ToolResult<ToolDefinition> {
        ToolDefinition::builder(BOOK_STAY_TOOL)
            .description("Books a hotel stay for a guest and returns the booking confirmation.")
            .parameter(
                ParamSpec::string("guest_name")
                    .required()
                    .with_description("Name of the guest."),
            )
            .parameter(
                ParamSpec::string("hotel_name")
                    .required()
                    .with_description("Name of the hotel."),
            )
            .parameter(
                ParamSpec::integer("num_nights")
                    .required()
                    .with_minimum(1)
                    .with_description("Number of nights to stay, at least one."),
            )
            .output_field(
                OutputField::new("message", ValueType::String)
                    .with_description("Human-readable booking confirmation."),
            )
            .output_field(
                OutputField::new("booking_id", ValueType::String)
                    .with_description("Unique id assigned to the booking."),
            )
            .build()
    }

    /// Registers the tool with the provided registry.
    ///
    /// # Errors
    ///
    /// Propagates definition and duplicate-registration errors.
    pub fn register(self, registry: &ToolRegistry) -> ToolResult<()> {
        registry.register_tool(Self::definition()?, self)
    }
}

#[async_trait]
impl Tool for BookStayTool {
    async fn invoke(&self, params: Map<String, Value>) -> ToolResult<Value> {
        let guest_name = string_param(&params, "guest_name")?;
        let hotel_name = string_param(&params, "hotel_name")?;
        let num_nights = integer_param(&params, "num_nights")?;

        let num_nights = u32::try_from(num_nights).map_err(|_| {
            ToolError::validation(format!("`num_nights` value {num_nights} is too large"))
        })?;

        let record = BookingRecord::new(guest_name, hotel_name, num_nights)
            .map_err(|err| ToolError::validation(err.to_string()))?;

        let message = format!(
            "Booking confirmed for {} at {} for {} night(s).",
            record.guest_name(),
            record.hotel_name(),
            record.num_nights(),
        );
        let id = self.store.append(record).await;

        Ok(json!({
            "message": message,
            "booking_id": id.to_string(),
        }))
    }
}

/// Tool returning every recorded booking in append order.
#[derive(Debug, Clone)]
pub struct ListBookingsTool {
    store: Arc<BookingStore>,
}

impl ListBookingsTool {
    /// Creates the tool over the supplied store.
    #[must_use]
    pub fn new(store: Arc<BookingStore>) -> Self {
        Self { store }
    }

    /// Builds the tool definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidDefinition`] if the static definition
    /// fails validation.
    pub fn definition() -> ToolResult<ToolDefinition> {
        ToolDefinition::builder(LIST_BOOKINGS_TOOL)
            .description("Lists every recorded hotel booking in the order it was made.")
            .output_field(
                OutputField::new("bookings", ValueType::Array)
                    .with_description("All booking records, oldest first."),
            )
            .build()
    }

    /// Registers the tool with the provided registry.
    ///
    /// # Errors
    ///
    /// Propagates definition and duplicate-registration errors.
    pub fn register(self, registry: &ToolRegistry) -> ToolResult<()> {
        registry.register_tool(Self::definition()?, self)
    }
}

#[async_trait]
impl Tool for ListBookingsTool {
    async fn invoke(&self, _params: Map<String, Value>) -> ToolResult<Value> {
        let records = self.store.all().await;
        let bookings =
            serde_json::to_value(records).map_err(|err| ToolError::execution(err.to_string()))?;
        Ok(json!({ "bookings": bookings }))
    }
}

fn string_param(params: &Map<String, Value>, name: &str) -> ToolResult<String> {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ToolError::execution(format!("parameter `{name}` missing after validation")))
}

fn integer_param(params: &Map<String, Value>, name: &str) -> ToolResult<i64> {
    params
        .get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| ToolError::execution(format!("parameter `{name}` missing after validation")))
}
