//! Cross-module tests for the loan simulation engine
//!
//! Tests are organized by topic:
//! - `payment_properties` - Invariants of the monthly payment formula
//! - `schedule_properties` - Invariants of generated schedules and their views
//! - `wizard_flow` - Birth date → form → quote, as the wizard chains them

mod wizard_flow;
