
use airdesk_test_utils::prelude::*;
