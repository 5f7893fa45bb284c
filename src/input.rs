//! Reading trees in the usual contest layout: the node count on the first
//! line, then one edge per line as `u v` or `u v w`, 0-indexed.

use std::{fmt::Display, str::FromStr};

use crate::{
    error::{Result, TreeError},
    tree::{EdgeWeight, Node, Tree},
};

/// Non-empty lines as (1-based line number, tokens).
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.split_ascii_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

fn field<T>(line: usize, token: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e| TreeError::Parse {
        line,
        message: format!("bad {what} {token:?}: {e}"),
    })
}

fn parse_with<W: EdgeWeight>(
    text: &str,
    columns: usize,
    mut edge: impl FnMut(usize, &[&str]) -> Result<(Node, Node, W)>,
) -> Result<Tree<W>> {
    let mut records = records(text);
    let (line, header) = records.next().ok_or(TreeError::Parse {
        line: 1,
        message: "missing node count".to_owned(),
    })?;
    if header.len() != 1 {
        return Err(TreeError::Parse {
            line,
            message: format!("expected the node count alone, got {} tokens", header.len()),
        });
    }
    let n = field(line, header[0], "node count")?;
    let edges = records
        .map(|(line, tokens)| {
            if tokens.len() != columns {
                return Err(TreeError::Parse {
                    line,
                    message: format!("expected {columns} tokens, got {}", tokens.len()),
                });
            }
            edge(line, &tokens)
        })
        .collect::<Result<Vec<_>>>()?;
    Tree::with_weights(n, edges)
}

pub fn parse_tree(text: &str) -> Result<Tree> {
    parse_with(text, 2, |line, t| {
        Ok((field(line, t[0], "node")?, field(line, t[1], "node")?, ()))
    })
}

pub fn parse_weighted_tree<W>(text: &str) -> Result<Tree<W>>
where
    W: FromStr + EdgeWeight,
    W::Err: Display,
{
    parse_with(text, 3, |line, t| {
        Ok((
            field(line, t[0], "node")?,
            field(line, t[1], "node")?,
            field(line, t[2], "weight")?,
        ))
    })
}
