use crate::utils::error::Result;
use crate::utils::validation::validate_isbn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍識別碼，建立後不可變更
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(value: &str) -> Result<Self> {
        validate_isbn(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    Available,
    Borrowed,
}

impl Availability {
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Borrowed => "Borrowed",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 尚未驗證的輸入紀錄（來自 TOML 或內建資料）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub date_added: Option<String>,
}

fn default_available() -> bool {
    true
}

impl BookRecord {
    pub fn new(title: &str, author: &str, isbn: &str, available: bool, date_added: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            available,
            date_added: Some(date_added.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    isbn: Isbn,
    available: bool,
    date_added: String,
}

impl Book {
    /// 驗證失敗時不會產生任何 Book
    pub fn new(
        title: &str,
        author: &str,
        isbn: &str,
        available: bool,
        date_added: &str,
    ) -> Result<Self> {
        Self::from_record(BookRecord::new(title, author, isbn, available, date_added))
    }

    /// 沒有 date_added 時以今天日期補上
    pub fn from_record(record: BookRecord) -> Result<Self> {
        let isbn = Isbn::parse(&record.isbn)?;
        let date_added = record
            .date_added
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

        Ok(Self {
            title: record.title,
            author: record.author,
            isbn,
            available: record.available,
            date_added,
        })
    }

    /// Marks the book as lent out. Returns `false` if it already was.
    #[must_use]
    pub fn borrow(&mut self) -> bool {
        if self.available {
            self.available = false;
            true
        } else {
            false
        }
    }

    /// Marks the book as back on the shelf. Returns `false` if it was not lent out.
    #[must_use]
    pub fn return_book(&mut self) -> bool {
        if self.available {
            false
        } else {
            self.available = true;
            true
        }
    }

    pub fn identifier(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn availability(&self) -> Availability {
        if self.available {
            Availability::Available
        } else {
            Availability::Borrowed
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date_added(&self) -> &str {
        &self.date_added
    }

    pub fn view(&self) -> BookView {
        BookView {
            title: self.title.clone(),
            author: self.author.clone(),
            identifier: self.isbn.as_str().to_string(),
            availability: self.availability(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

/// 列表用的唯讀檢視
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookView {
    pub title: String,
    pub author: String,
    pub identifier: String,
    pub availability: Availability,
}

impl fmt::Display for BookView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "ISBN: {}", self.identifier)?;
        writeln!(f, "Availability: {}", self.availability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    NotFound,
    Borrowed,
    AlreadyBorrowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    NotFound,
    Returned,
    WasNotBorrowed,
}
