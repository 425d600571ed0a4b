use crate::core::{Book, BookRecord, BookView, BorrowOutcome, ReturnOutcome, SeedSource};
use crate::utils::error::{CatalogError, Result};

/// 依序排列的書籍集合，以 ISBN 作為邏輯鍵值
///
/// ISBN 不強制唯一；借還操作一律作用在目前順序中第一筆相符的紀錄。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// 逐筆建立紀錄；無效的紀錄被略過並回報，不影響其他紀錄
    pub fn initialize<I>(records: I) -> (Self, Vec<CatalogError>)
    where
        I: IntoIterator<Item = BookRecord>,
    {
        let mut catalog = Self::new();
        let mut rejected = Vec::new();

        for record in records {
            if let Err(e) = catalog.try_insert(record) {
                tracing::debug!("Skipping record: {}", e);
                rejected.push(e);
            }
        }

        tracing::debug!(
            "Catalog initialized with {} books ({} rejected)",
            catalog.len(),
            rejected.len()
        );
        (catalog, rejected)
    }

    pub fn from_seed(seed: &dyn SeedSource) -> (Self, Vec<CatalogError>) {
        tracing::info!("📚 Loading catalog '{}'", seed.catalog_name());
        let (mut catalog, rejected) = Self::initialize(seed.records().iter().cloned());
        if seed.sort_on_load() {
            catalog.sort_by_identifier();
        }
        (catalog, rejected)
    }

    pub fn try_insert(&mut self, record: BookRecord) -> Result<()> {
        let book = Book::from_record(record)?;
        self.push(book);
        Ok(())
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// 穩定排序，以 ISBN 字串逐位元組比較（非數值比較）
    pub fn sort_by_identifier(&mut self) {
        self.books.sort_by(|a, b| a.isbn().cmp(b.isbn()));
        tracing::debug!("Sorted {} books by ISBN", self.books.len());
    }

    pub fn find(&self, identifier: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.identifier() == identifier)
    }

    fn find_mut(&mut self, identifier: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.identifier() == identifier)
    }

    pub fn borrow_by_identifier(&mut self, identifier: &str) -> BorrowOutcome {
        let outcome = match self.find_mut(identifier) {
            None => BorrowOutcome::NotFound,
            Some(book) => {
                if book.borrow() {
                    BorrowOutcome::Borrowed
                } else {
                    BorrowOutcome::AlreadyBorrowed
                }
            }
        };
        tracing::debug!("borrow {} -> {:?}", identifier, outcome);
        outcome
    }

    pub fn return_by_identifier(&mut self, identifier: &str) -> ReturnOutcome {
        let outcome = match self.find_mut(identifier) {
            None => ReturnOutcome::NotFound,
            Some(book) => {
                if book.return_book() {
                    ReturnOutcome::Returned
                } else {
                    ReturnOutcome::WasNotBorrowed
                }
            }
        };
        tracing::debug!("return {} -> {:?}", identifier, outcome);
        outcome
    }

    pub fn list_all(&self) -> Vec<BookView> {
        self.books.iter().map(Book::view).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
