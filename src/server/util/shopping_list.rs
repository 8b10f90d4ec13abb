//! Shopping list aggregation and page layout.
//!
//! Aggregation merges ingredient lines from every recipe in a cart into one line per
//! `(name, measurement_unit)` pair. Layout turns the merged lines into pages of positioned
//! text lines so pagination can be checked without producing a PDF; see
//! [`crate::server::util::pdf`] for emission.

use std::collections::HashMap;

/// Header written at the top of the first page
pub const SHOPPING_LIST_HEADER: &str = "Shopping list:";
/// Message written instead of the header and items when the cart is empty
pub const EMPTY_SHOPPING_LIST_MESSAGE: &str = "Shopping list is empty!";

/// Total quantity of one ingredient across the cart
#[derive(Clone, Debug, PartialEq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

impl ShoppingListItem {
    /// Formats the item as a numbered list line, `position` is 1-based
    pub fn line(&self, position: usize) -> String {
        format!(
            "{}. {} - {} {}.",
            position, self.name, self.amount, self.measurement_unit
        )
    }
}

/// Sums amounts per `(name, measurement_unit)`.
///
/// Lines are `(name, measurement_unit, amount)`. Output keeps the order in which each pair
/// was first seen.
pub fn aggregate<I>(lines: I) -> Vec<ShoppingListItem>
where
    I: IntoIterator<Item = (String, String, i32)>,
{
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut items: Vec<ShoppingListItem> = Vec::new();

    for (name, measurement_unit, amount) in lines {
        let key = (name, measurement_unit);

        match positions.get(&key) {
            Some(&position) => items[position].amount += i64::from(amount),
            None => {
                positions.insert(key.clone(), items.len());
                items.push(ShoppingListItem {
                    name: key.0,
                    measurement_unit: key.1,
                    amount: i64::from(amount),
                });
            }
        }
    }

    items
}

/// A text line placed on a page, coordinates in points from the bottom left corner
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

/// Vertical layout parameters of a shopping list page, all in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    pub left_margin: f32,
    /// Cursor position at the start of every page
    pub top: f32,
    /// A new page starts once the cursor is at or below this position
    pub bottom_margin: f32,
    /// Distance between the cursor and the baseline of the line drawn below it
    pub line_offset: f32,
    /// Cursor advance after each item line
    pub line_height: f32,
    pub font_size: f32,
    pub empty_font_size: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            left_margin: 50.0,
            top: 800.0,
            bottom_margin: 50.0,
            line_offset: 20.0,
            line_height: 15.0,
            font_size: 14.0,
            empty_font_size: 24.0,
        }
    }
}

impl PageLayout {
    /// Places the header and numbered item lines onto as many pages as required.
    ///
    /// Always returns at least one page. Numbering continues across pages.
    pub fn lay_out(&self, items: &[ShoppingListItem]) -> Vec<Vec<PlacedLine>> {
        if items.is_empty() {
            return vec![vec![PlacedLine {
                x: self.left_margin,
                y: self.top,
                font_size: self.empty_font_size,
                text: EMPTY_SHOPPING_LIST_MESSAGE.to_string(),
            }]];
        }

        let mut pages = vec![vec![PlacedLine {
            x: self.left_margin,
            y: self.top,
            font_size: self.font_size,
            text: SHOPPING_LIST_HEADER.to_string(),
        }]];
        let mut cursor = self.top;
        let mut page_full = false;

        for (index, item) in items.iter().enumerate() {
            if page_full {
                pages.push(Vec::new());
                cursor = self.top;
                page_full = false;
            }

            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    x: self.left_margin,
                    y: cursor - self.line_offset,
                    font_size: self.font_size,
                    text: item.line(index + 1),
                });
            }

            cursor -= self.line_height;
            if cursor <= self.bottom_margin {
                page_full = true;
            }
        }

        pages
    }
}
