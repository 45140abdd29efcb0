use std::cmp::Ordering;

use crate::catalog::{Catalog, CatalogItem, Category, Style};

/// Rank of `item_style` for a `target` style: 0 for an exact match, then the
/// position in `fallback` (offset by one), then everything else.
pub fn style_rank(item_style: Style, target: Style, fallback: &[Style]) -> usize {
    if item_style == target {
        return 0;
    }
    match fallback.iter().position(|s| *s == item_style) {
        Some(pos) => pos + 1,
        None => fallback.len() + 1,
    }
}

/// Chooses the best catalog item per category for a target style.
pub struct StylePicker<'a> {
    catalog: &'a Catalog,
    fallback: &'a [Style],
}

impl<'a> StylePicker<'a> {
    pub fn new(catalog: &'a Catalog, fallback: &'a [Style]) -> Self {
        Self { catalog, fallback }
    }

    /// Best candidate in `category` outside `exclude`.
    ///
    /// Ordered by style rank, then price: most expensive first for a Premium
    /// target, cheapest first otherwise. Remaining ties go to catalog order.
    pub fn pick(
        &self,
        category: &Category,
        target: Style,
        exclude: &[&str],
    ) -> Option<&'a CatalogItem> {
        self.catalog
            .in_category(category)
            .filter(|item| !exclude.contains(&item.id.as_str()))
            .min_by(|a, b| self.compare(a, b, target))
    }

    fn compare(&self, a: &CatalogItem, b: &CatalogItem, target: Style) -> Ordering {
        let rank_a = style_rank(a.style, target, self.fallback);
        let rank_b = style_rank(b.style, target, self.fallback);
        rank_a.cmp(&rank_b).then_with(|| {
            if target == Style::Premium {
                b.price.total_cmp(&a.price)
            } else {
                a.price.total_cmp(&b.price)
            }
        })
    }
}
