// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `users`: user lookups by id, username and location
//! - `cases`: case lookups, dashboard filters and the reference-prefix lookup
//! - `details`: stage detail records and pre-charge number uniqueness

pub mod cases;
pub mod details;
pub mod users;
