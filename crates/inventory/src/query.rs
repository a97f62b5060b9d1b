use serde::{Deserialize, Serialize};

use crate::item::{Category, Item};

/// Field filter over items.
///
/// The predicate is the conjunction of the supplied fields; an unset field
/// matches every item, so the default query matches everything. `count` takes
/// any integer so out-of-range values select nothing instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemQuery {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub count: Option<i64>,
    pub category: Option<Category>,
}

impl ItemQuery {
    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_ref().is_none_or(|n| *n == item.name)
            && self.price.is_none_or(|p| p == item.price)
            && self.count.is_none_or(|c| c == i64::from(item.count))
            && self.category.is_none_or(|c| same_category(c, item.category))
    }
}

fn same_category(a: Category, b: Category) -> bool {
    match (a, b) {
        (Category::Tools, Category::Tools) => true,
        (Category::Consumables, Category::Consumables) => true,
        (Category::Tools, _) | (Category::Consumables, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ItemId;

    fn nails() -> Item {
        Item::new(ItemId::new(2), "Nails", 1.99, 100, Category::Consumables)
    }

    #[test]
    fn empty_query_matches_anything() {
        assert!(ItemQuery::default().matches(&nails()));
    }

    #[test]
    fn every_supplied_field_must_match() {
        let q = ItemQuery {
            name: Some("Nails".into()),
            count: Some(100),
            ..ItemQuery::default()
        };
        assert!(q.matches(&nails()));

        let q = ItemQuery {
            name: Some("Nails".into()),
            count: Some(99),
            ..ItemQuery::default()
        };
        assert!(!q.matches(&nails()));
    }

    #[test]
    fn name_match_is_exact() {
        let q = ItemQuery {
            name: Some("nails".into()),
            ..ItemQuery::default()
        };
        assert!(!q.matches(&nails()));
    }

    #[test]
    fn out_of_range_count_matches_nothing() {
        for count in [-1, i64::from(u32::MAX) + 1] {
            let q = ItemQuery {
                count: Some(count),
                ..ItemQuery::default()
            };
            assert!(!q.matches(&nails()));
        }
    }

    #[test]
    fn category_must_be_equal() {
        let q = ItemQuery {
            category: Some(Category::Tools),
            ..ItemQuery::default()
        };
        assert!(!q.matches(&nails()));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = Category> {
            prop_oneof![Just(Category::Tools), Just(Category::Consumables)]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a query built from an item's own fields always matches it.
            #[test]
            fn query_of_own_fields_matches(
                name in "[A-Za-z]{1,12}",
                price in 0.0f64..1000.0,
                count in any::<u32>(),
                cat in category(),
            ) {
                let item = Item::new(ItemId::new(1), name.clone(), price, count, cat);
                let q = ItemQuery {
                    name: Some(name),
                    price: Some(price),
                    count: Some(i64::from(count)),
                    category: Some(cat),
                };
                prop_assert!(q.matches(&item));
            }

            /// Property: a query on a different count never matches.
            #[test]
            fn differing_count_never_matches(count in any::<u32>(), other in any::<i64>()) {
                prop_assume!(i64::from(count) != other);
                let item = Item::new(ItemId::new(1), "Widget", 1.0, count, Category::Tools);
                let q = ItemQuery { count: Some(other), ..ItemQuery::default() };
                prop_assert!(!q.matches(&item));
            }
        }
    }
}
