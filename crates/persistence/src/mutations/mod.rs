// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! - `users`: identity sync: create, activate and delete users
//! - `cases`: case creation with reference generation, edits and deletion
//! - `details`: create-if-absent for stage detail records
//! - `transition`: atomic persistence of a core transition result

pub mod cases;
pub mod details;
pub mod transition;
pub mod users;
