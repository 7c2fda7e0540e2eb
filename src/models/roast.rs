//! Coffee roasting models.
//!
//! This module contains models for roast telemetry, starting with the roast
//! scope: the data behind a live BT/ET/RoR chart.

pub mod scope;
