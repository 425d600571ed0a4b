use crate::core::SeedSource;
use crate::domain::model::BookRecord;

/// 未指定設定檔時使用的五本經典書
#[derive(Debug, Clone)]
pub struct BuiltinSeed {
    records: Vec<BookRecord>,
}

impl BuiltinSeed {
    pub fn new() -> Self {
        Self {
            records: vec![
                BookRecord::new(
                    "To Kill a Mockingbird",
                    "Harper Lee",
                    "9780060935467",
                    true,
                    "2020-01-01",
                ),
                BookRecord::new("1984", "George Orwell", "9780451524935", true, "2020-02-01"),
                BookRecord::new(
                    "The Great Gatsby",
                    "F. Scott Fitzgerald",
                    "9780743273565",
                    true,
                    "2020-03-01",
                ),
                BookRecord::new(
                    "The Catcher in the Rye",
                    "J.D. Salinger",
                    "9780316769488",
                    true,
                    "2020-04-01",
                ),
                BookRecord::new(
                    "Pride and Prejudice",
                    "Jane Austen",
                    "9780141439518",
                    true,
                    "2020-05-01",
                ),
            ],
        }
    }
}

impl Default for BuiltinSeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for BuiltinSeed {
    fn catalog_name(&self) -> &str {
        "Built-in classics"
    }

    fn records(&self) -> &[BookRecord] {
        &self.records
    }

    fn sort_on_load(&self) -> bool {
        true
    }
}
