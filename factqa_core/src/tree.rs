//! Constituency parse trees.
//!
//! Trees arrive from the parser in Penn Treebank bracket notation, e.g.
//! `(ROOT (S (NP (NNP Lincoln)) (VP (VBD was) (VP (VBN killed)))))`.
//! A node without children is a leaf and its label is the surface word.

use thiserror::Error;

/// Bracketed tree reading error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("empty tree")]
    Empty,

    #[error("unexpected ')' at token {0}")]
    UnexpectedClose(usize),

    #[error("missing ')' before end of input")]
    Unclosed,

    #[error("trailing input after tree at token {0}")]
    Trailing(usize),

    #[error("expected '(' at token {0}")]
    ExpectedOpen(usize),
}

/// A labeled node with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub label: String,
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    #[must_use]
    pub fn leaf(word: impl Into<String>) -> Self {
        Self {
            label: word.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn node(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn first_child(&self) -> Option<&Self> {
        self.children.first()
    }

    /// Surface words under this node, left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_leaf() {
            out.push(&self.label);
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// Leaves joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.leaves().join(" ")
    }

    /// Read one tree in bracket notation.
    pub fn from_bracketed(input: &str) -> Result<Self, TreeError> {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut reader = Reader { tokens, pos: 0 };
        let tree = reader.node()?;
        if reader.pos < reader.tokens.len() {
            return Err(TreeError::Trailing(reader.pos));
        }
        Ok(tree)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token::Atom(&input[s..i]));
            }
            match c {
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::Atom(&input[s..]));
    }

    tokens
}

struct Reader<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl Reader<'_> {
    fn node(&mut self) -> Result<ParseTree, TreeError> {
        match self.tokens.get(self.pos) {
            Some(Token::Open) => self.pos += 1,
            Some(_) => return Err(TreeError::ExpectedOpen(self.pos)),
            None => return Err(TreeError::Unclosed),
        }

        // `( (S ...))` is an unlabeled root
        let label = match self.tokens.get(self.pos) {
            Some(Token::Atom(label)) => {
                self.pos += 1;
                (*label).to_string()
            }
            _ => String::new(),
        };

        let mut children = Vec::new();
        loop {
            match self.tokens.get(self.pos) {
                Some(Token::Close) => {
                    self.pos += 1;
                    break;
                }
                Some(Token::Open) => children.push(self.node()?),
                Some(Token::Atom(word)) => {
                    children.push(ParseTree::leaf(*word));
                    self.pos += 1;
                }
                None => return Err(TreeError::Unclosed),
            }
        }

        if label.is_empty() && children.is_empty() {
            return Err(TreeError::UnexpectedClose(self.pos - 1));
        }

        Ok(ParseTree::node(label, children))
    }
}
