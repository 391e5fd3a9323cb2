//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole process.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); every
//! actor log line carries an `actor` field instead. Levels come from `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per cart change
//! RUST_LOG=debug cargo run    # every request, lookup and store access
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Cart rehydrated key="@RocketShoes:cart" size=0
//! INFO Actor started actor="cart" size=0
//! INFO Added actor="cart" product_id=product_1 amount=1
//! WARN Add failed actor="cart" product_id=product_1 error=Insufficient stock for product_1: requested 4, available 3
//! WARN Requested quantity is out of stock notice=InsufficientStockOnAdd
//! ```
//!
//! **With `RUST_LOG=debug`** the client spans show up as well:
//!
//! ```text
//! DEBUG add_product{product_id=product_1}: Sending request
//! DEBUG AddProduct actor="cart" product_id=product_1
//! DEBUG stock{id=product_1}: Sending request
//! DEBUG Stock actor="catalog" id=product_1 found=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use the actor field instead
        .compact() // Compact format shows spans inline (e.g., "add_product:stock")
        .init();
}
