use crate::artifacts::core::{PorcelainError, PorcelainResult};
use crate::artifacts::status::repo_status::RepoStatus;
use std::io::BufRead;

/// `# <key> <values...>` header lines emitted by `--branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header<'l> {
    Oid(&'l str),
    Head(&'l str),
    Upstream(&'l str),
    AheadBehind(Vec<&'l str>),
    /// Keys this parser does not use (`stash`, future additions) or keys
    /// missing their value.
    Other,
}

/// One line of `git status --porcelain=v2` output.
///
/// Only the fields needed for the prompt are kept; file modes, object names,
/// rename scores and paths are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record<'l> {
    Header(Header<'l>),
    Changed { xy: &'l str },
    RenamedOrCopied { xy: &'l str },
    Unmerged,
    Untracked,
    Ignored,
    Unknown,
}

impl<'l> Record<'l> {
    pub fn parse(line: &'l str) -> Self {
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("#") => Record::Header(Self::parse_header(fields)),
            Some("1") => fields
                .next()
                .map_or(Record::Unknown, |xy| Record::Changed { xy }),
            Some("2") => fields
                .next()
                .map_or(Record::Unknown, |xy| Record::RenamedOrCopied { xy }),
            Some("u") => Record::Unmerged,
            Some("?") => Record::Untracked,
            Some("!") => Record::Ignored,
            _ => Record::Unknown,
        }
    }

    fn parse_header(mut fields: std::str::SplitWhitespace<'l>) -> Header<'l> {
        let key = fields.next();
        match key {
            Some("branch.oid") => fields.next().map_or(Header::Other, Header::Oid),
            Some("branch.head") => fields.next().map_or(Header::Other, Header::Head),
            Some("branch.upstream") => fields.next().map_or(Header::Other, Header::Upstream),
            Some("branch.ab") => Header::AheadBehind(fields.collect()),
            _ => Header::Other,
        }
    }
}

/// Accumulates porcelain v2 records into a [`RepoStatus`].
///
/// The status under construction is owned by the parser and only handed out
/// by [`StatusParser::finish`].
#[derive(Debug, Default)]
pub struct StatusParser {
    status: RepoStatus,
}

impl StatusParser {
    /// Parses a whole status stream.
    ///
    /// Unknown or truncated lines are skipped. The parse only fails if the
    /// stream cannot be read or an ahead/behind counter is not a number.
    ///
    /// Paths are raw bytes when `core.quotePath` is off, so lines are decoded
    /// lossily instead of being rejected.
    pub fn parse<R: BufRead>(reader: R) -> PorcelainResult<RepoStatus> {
        tracing::debug!("parsing git output");

        let mut parser = StatusParser::default();
        for line in reader.split(b'\n') {
            let line = line?;
            parser.feed_line(&String::from_utf8_lossy(&line))?;
        }

        Ok(parser.finish())
    }

    pub fn feed_line(&mut self, line: &str) -> PorcelainResult<()> {
        match Record::parse(line) {
            Record::Header(header) => self.apply_header(header)?,
            Record::Changed { xy } | Record::RenamedOrCopied { xy } => {
                self.status.record_xy(xy)
            }
            Record::Unmerged => self.status.unmerged += 1,
            Record::Untracked => self.status.untracked += 1,
            Record::Ignored => {}
            Record::Unknown if line.trim().is_empty() => {}
            Record::Unknown => tracing::trace!(line, "skipping unrecognized status line"),
        }

        Ok(())
    }

    pub fn finish(self) -> RepoStatus {
        self.status
    }

    fn apply_header(&mut self, header: Header<'_>) -> PorcelainResult<()> {
        match header {
            Header::Oid(oid) => self.status.commit = oid.to_string(),
            Header::Head(head) => self.status.branch = head.to_string(),
            Header::Upstream(upstream) => {
                self.status.upstream = upstream.to_string();
                // the remote name itself is not part of the v2 output
                self.status.remote = upstream
                    .split_once('/')
                    .map(|(remote, _)| remote.to_string())
                    .unwrap_or_default();
            }
            Header::AheadBehind(tokens) => self.apply_ahead_behind(&tokens)?,
            Header::Other => {}
        }

        Ok(())
    }

    fn apply_ahead_behind(&mut self, tokens: &[&str]) -> PorcelainResult<()> {
        for token in tokens {
            let mut chars = token.chars();
            let sign = chars.next();
            let digits = chars.as_str();

            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PorcelainError::MalformedNumericField {
                    token: token.to_string(),
                });
            }
            let count = digits
                .parse::<usize>()
                .map_err(|_| PorcelainError::MalformedNumericField {
                    token: token.to_string(),
                })?;

            match sign {
                Some('+') => self.status.ahead = count,
                Some('-') => self.status.behind = count,
                _ => {}
            }
        }

        Ok(())
    }
}
