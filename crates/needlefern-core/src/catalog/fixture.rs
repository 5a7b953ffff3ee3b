//! The hardcoded product catalog served by the storefront.

use crate::model::Product;

/// Builds the catalog fixture, in display order.
///
/// Called once by the lifecycle orchestrator; the result is moved into the
/// [`CatalogActor`](super::CatalogActor) and never changes afterwards.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1001, "Snowman Cross Stitch and Knitting Pattern", "3.60", 9999)
            .with_url("https://www.etsy.com/listing/snowman-pattern-mock")
            .with_image("snowman.png")
            .with_description(
                "A charming cross stitch and knitting pattern featuring a happy snowman, \
                 perfect for winter holidays. Easy difficulty level.",
            ),
        Product::new(1002, "Vintage Airplane Cross Stitch Pattern", "4.20", 9999)
            .with_url("https://www.etsy.com/listing/airplane-pattern-mock")
            .with_image("airflot.png")
            .with_description(
                "A complex and detailed vintage airplane pattern. Suitable for experienced \
                 crafters. A wonderful gift for aviation enthusiasts.",
            ),
        Product::new(1003, "Christmas Bell Cross Stitch Pattern", "3.60", 50)
            .with_url("https://www.etsy.com/listing/bell-pattern-mock")
            .with_image("bell.png")
            .with_description(
                "A simple and elegant Christmas bell pattern. Ideal for decorating cards \
                 and small gifts.",
            ),
        Product::new(1004, "Cross stitch pattern Santa's Sleigh", "3.60", 9999)
            .with_url("https://www.etsy.com/listing/sleigh-pattern-mock")
            .with_image("moon.png")
            .with_description(
                "A cross-stitch pattern depicting Santa's sleigh. A festive design to \
                 create a holiday mood.",
            ),
    ]
}
