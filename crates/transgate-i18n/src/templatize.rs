//! Template source to gettext-call conversion for message extraction
//!
//! The output is fed to a gettext extraction tool. Translation tags become
//! `gettext`-family calls; every other non-whitespace character is blanked
//! out so that extracted messages keep their template line numbers.

use crate::error::{I18nError, I18nResult};
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%.*?%\}|\{\{.*?\}\}|\{#.*?#\}").expect("Invalid template token regex pattern")
});

static TRANS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*trans\s+("[^"]*?"|'[^']*?')(\s+.*context\s+("[^"]*?"|'[^']*?'))?\s*"#)
        .expect("Invalid trans tag regex pattern")
});

static BLOCKTRANS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*blocktrans(\s+.*context\s+("[^"]*?"|'[^']*?'))?(?:\s+|$)"#)
        .expect("Invalid blocktrans tag regex pattern")
});

static ENDBLOCKTRANS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*endblocktrans$").expect("Invalid endblocktrans regex pattern"));

static PLURAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*plural$").expect("Invalid plural tag regex pattern"));

static CONSTANT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*_\(("[^"]*?"|'[^']*?')\)\s*"#).expect("Invalid constant regex pattern")
});

const TRANSLATOR_COMMENT_MARK: &str = "Translators";

#[derive(Debug)]
enum Token<'a> {
    Text(&'a str),
    Var(&'a str),
    Block(&'a str),
    Comment(&'a str),
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for found in TOKEN_RE.find_iter(source) {
        if found.start() > last {
            tokens.push(Token::Text(&source[last..found.start()]));
        }
        let raw = found.as_str();
        let contents = raw[2..raw.len() - 2].trim();
        tokens.push(match &raw[..2] {
            "{%" => Token::Block(contents),
            "{{" => Token::Var(contents),
            _ => Token::Comment(contents),
        });
        last = found.end();
    }
    if last < source.len() {
        tokens.push(Token::Text(&source[last..]));
    }
    tokens
}

/// Replaces every non-whitespace character of `text` with `replacement`
pub fn blankout(text: &str, replacement: char) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { c } else { replacement })
        .collect()
}

fn unquote(quoted: &str) -> &str {
    quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| quoted.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(quoted)
}

fn literal(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn escape_percent(text: &str) -> String {
    text.replace('%', "%%")
}

#[derive(Debug, Default)]
struct TranslationBlock {
    context: Option<String>,
    singular: String,
    plural: String,
    in_plural: bool,
}

impl TranslationBlock {
    fn push(&mut self, text: &str) {
        if self.in_plural {
            self.plural.push_str(text);
        } else {
            self.singular.push_str(text);
        }
    }

    fn finish(self, out: &mut String) {
        let call = match (&self.context, self.in_plural) {
            (Some(context), true) => format!(
                " npgettext({}, {}, {}, count) ",
                literal(context),
                literal(&self.singular),
                literal(&self.plural)
            ),
            (None, true) => format!(
                " ngettext({}, {}, count) ",
                literal(&self.singular),
                literal(&self.plural)
            ),
            (Some(context), false) => {
                format!(" pgettext({}, {}) ", literal(context), literal(&self.singular))
            }
            (None, false) => format!(" gettext({}) ", literal(&self.singular)),
        };
        out.push_str(&call);
        out.push_str(&blankout(&self.singular, 'S'));
        out.push_str(&blankout(&self.plural, 'P'));
    }
}

/// Converts template `source` into gettext calls
///
/// `origin` names the template in error messages.
pub fn templatize(source: &str, origin: Option<&str>) -> I18nResult<String> {
    let origin = origin.unwrap_or("<unknown source>");
    let error = |message: String| I18nError::Template {
        origin: origin.to_string(),
        message,
    };

    let mut out = String::with_capacity(source.len());
    let mut block: Option<TranslationBlock> = None;

    for token in tokenize(source) {
        if let Some(current) = block.as_mut() {
            match token {
                Token::Block(contents) if ENDBLOCKTRANS_RE.is_match(contents) => {
                    if let Some(finished) = block.take() {
                        finished.finish(&mut out);
                    }
                }
                Token::Block(contents) if PLURAL_RE.is_match(contents) => current.in_plural = true,
                Token::Block(contents) => {
                    return Err(error(format!(
                        "translation blocks must not include other block tags: {contents}"
                    )));
                }
                Token::Var(contents) => {
                    let name = contents.split('|').next().unwrap_or_default().trim();
                    current.push(&format!("%({name})s"));
                }
                Token::Text(text) => current.push(&escape_percent(text)),
                Token::Comment(contents) => out.push_str(&blankout(contents, 'X')),
            }
            continue;
        }

        match token {
            Token::Comment(contents) if contents.starts_with(TRANSLATOR_COMMENT_MARK) => {
                out.push_str(&format!("# {contents}\n"));
            }
            Token::Comment(contents) => out.push_str(&blankout(contents, 'X')),
            Token::Block(contents) => {
                if let Some(caps) = TRANS_RE.captures(contents) {
                    let message = escape_percent(unquote(&caps[1]));
                    match caps.get(3) {
                        Some(context) => out.push_str(&format!(
                            " pgettext({}, {}) ",
                            literal(unquote(context.as_str())),
                            literal(&message)
                        )),
                        None => out.push_str(&format!(" gettext({}) ", literal(&message))),
                    }
                } else if let Some(caps) = BLOCKTRANS_RE.captures(contents) {
                    block = Some(TranslationBlock {
                        context: caps.get(2).map(|c| unquote(c.as_str()).to_string()),
                        ..Default::default()
                    });
                } else {
                    out.push_str(&blankout(contents, 'B'));
                }
            }
            Token::Var(contents) => {
                let mut parts = contents.split('|');
                let head = parts.next().unwrap_or_default();
                match CONSTANT_RE.captures(head) {
                    Some(caps) => out.push_str(&format!(" _({}) ", &caps[1])),
                    None => out.push_str(&blankout(head, 'X')),
                }
                for filter in parts {
                    if filter.contains(":_(") {
                        let argument = filter.split_once(':').map_or(filter, |(_, arg)| arg);
                        out.push_str(&format!(" {argument} "));
                    } else {
                        out.push_str(&blankout(filter, 'F'));
                    }
                }
            }
            Token::Text(text) => out.push_str(&blankout(text, 'X')),
        }
    }

    if block.is_some() {
        return Err(error("unclosed blocktrans tag".to_string()));
    }
    Ok(out)
}
