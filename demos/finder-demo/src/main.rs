//! Demo wiring the GridPoint runtime end to end: catalog configuration,
//! tool registration, manifest discovery, and a handful of invocations.

use std::sync::Arc;

use anyhow::Result;
use grid_bookings::BookingStore;
use grid_index::PointIndex;
use grid_primitives::Catalog;
use grid_tools::booking::{BOOK_STAY_TOOL, BookStayTool, LIST_BOOKINGS_TOOL, ListBookingsTool};
use grid_tools::envelope::InvocationReply;
use grid_tools::nearest::{FIND_CLOSEST_TOOL, NearestPointTool};
use grid_tools::registry::ToolRegistry;
use serde_json::{Map, Value, json};
use tracing::info;

const CATALOG: &str = include_str!("../catalog.json");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    info!("=== GridPoint: finder demo ===");

    // Catalogs are configuration, not code.
    let catalog: Catalog = serde_json::from_str(CATALOG)?;
    info!(points = catalog.len(), "catalog loaded");

    let index = Arc::new(PointIndex::new(catalog));
    let store = Arc::new(BookingStore::new());

    let registry = ToolRegistry::new();
    NearestPointTool::new(index).register(&registry)?;
    BookStayTool::new(Arc::clone(&store)).register(&registry)?;
    ListBookingsTool::new(store).register(&registry)?;

    let manifest = registry.manifest();
    info!(
        tools = manifest.tools().len(),
        "manifest:\n{}",
        serde_json::to_string_pretty(&manifest)?
    );

    // A direct hit, a mid-grid query, an out-of-range rejection, and an
    // unknown tool, each rendered as its reply envelope.
    invoke(&registry, FIND_CLOSEST_TOOL, json!({ "x": 80, "y": 15 })).await?;
    invoke(&registry, FIND_CLOSEST_TOOL, json!({ "x": 47, "y": 52 })).await?;
    invoke(&registry, FIND_CLOSEST_TOOL, json!({ "x": 150, "y": 10 })).await?;
    invoke(&registry, "nonexistent_tool", json!({ "x": 1, "y": 2 })).await?;

    // Booking flow against the same registry.
    invoke(
        &registry,
        BOOK_STAY_TOOL,
        json!({
            "guest_name": "Alice Smith",
            "hotel_name": "Grand Hotel",
            "num_nights": 3,
        }),
    )
    .await?;
    invoke(&registry, LIST_BOOKINGS_TOOL, json!({})).await?;

    Ok(())
}

async fn invoke(registry: &ToolRegistry, tool: &str, params: Value) -> Result<()> {
    let params: Map<String, Value> = match params {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let result = registry.invoke(tool, params).await;
    let reply = InvocationReply::from_result(tool, result);
    info!(
        tool,
        status = reply.http_status(),
        "reply: {}",
        serde_json::to_string(&reply)?
    );

    Ok(())
}
