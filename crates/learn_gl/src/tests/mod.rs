//! Render loop and startup tests against a recording fake platform

mod fake;
