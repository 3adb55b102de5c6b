// Copyright 2026 the Flavorwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the flavorwheel demo examples.

use flavorwheel_taxonomy::Document;

/// Loads the bundled taster's wheel asset.
pub fn bundled_wheel() -> Document {
    Document::from_json_str(include_str!("../assets/coffee.json"))
        .expect("bundled taxonomy asset is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_asset_parses_and_validates() {
        let doc = bundled_wheel();
        assert_eq!(doc.meta.name, "SCAA 2016");
        assert!(doc.node_count() > 20);
    }
}
