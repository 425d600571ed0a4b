use crate::app::render;
use crate::core::catalog::Catalog;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Borrow,
    Return,
    List,
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(1) => Ok(Command::Borrow),
            Ok(2) => Ok(Command::Return),
            Ok(3) => Ok(Command::List),
            Ok(0) => Ok(Command::Exit),
            _ => Err(format!("unknown menu choice: {}", s)),
        }
    }
}

const MENU: &str = "Library Management System\n\
                    1. Borrow a book by ISBN\n\
                    2. Return a book by ISBN\n\
                    3. Display all books\n\
                    0. Exit\n\
                    Enter your choice: ";

/// 互動式選單；輸入結束 (EOF) 視同選擇離開
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt(MENU)?;
            let Some(choice) = self.next_token()? else {
                tracing::debug!("Input closed, leaving menu");
                break;
            };

            match choice.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(Command::Borrow) => {
                    self.prompt("Enter ISBN to borrow a book: ")?;
                    let Some(isbn) = self.next_token()? else { break };
                    let outcome = self.catalog.borrow_by_identifier(&isbn);
                    writeln!(self.output, "{}", render::borrow_message(outcome, &isbn))?;
                }
                Ok(Command::Return) => {
                    self.prompt("Enter ISBN to return a book: ")?;
                    let Some(isbn) = self.next_token()? else { break };
                    let outcome = self.catalog.return_by_identifier(&isbn);
                    writeln!(self.output, "{}", render::return_message(outcome, &isbn))?;
                }
                Ok(Command::List) => {
                    writeln!(self.output, "Displaying all books:")?;
                    let listing = render::render_listing(&self.catalog.list_all());
                    write!(self.output, "{}", listing)?;
                }
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// 以空白分隔逐詞讀取，一行可含多個詞，也可跨行
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
