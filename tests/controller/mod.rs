//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and the
//! exact JSON envelopes returned for success and for each error category.

mod booking;
mod country;
mod passenger;
mod ticket;

use airdesk_test_utils::prelude::*;

use crate::util::{body_json, payload, TestContextExt};
