// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seam_edit::errors::EditorError;

fn main() -> Result<(), EditorError> {
    seam_edit::run()
}
