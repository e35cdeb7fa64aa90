/// DIMACS CNF parsing. Whitespace-tokenized, `c`-prefixed comment lines, a
/// `p cnf <nvars> <nclauses>` header, and signed-integer clauses spanning
/// arbitrarily many lines and terminated by a literal `0`.
use crate::sat::error::ParseError;
use crate::sat::solver::Solver;
use crate::sat::var::Lit;

pub struct Parsed {
    pub n_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

/// Parses `input` into variable count and clause list. The header's clause
/// count is read to size the output but is never checked against the number
/// of clauses actually present, matching the source.
pub fn parse(input: &str) -> Result<Parsed, ParseError> {
    let mut lines = input.lines().filter(|l| !l.trim_start().starts_with('c'));

    let header = lines
        .find(|l| !l.trim().is_empty())
        .ok_or(ParseError::MissingHeader)?;
    let mut header_tokens = header.split_whitespace();
    match (header_tokens.next(), header_tokens.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => {
            return Err(ParseError::MalformedHeader {
                line: header.to_string(),
            })
        }
    }
    let n_vars: u32 = header_tokens
        .next()
        .ok_or_else(|| ParseError::MalformedHeader {
            line: header.to_string(),
        })?
        .parse()
        .map_err(|_| ParseError::MalformedHeader {
            line: header.to_string(),
        })?;
    let n_clauses: usize = header_tokens
        .next()
        .ok_or_else(|| ParseError::MalformedHeader {
            line: header.to_string(),
        })?
        .parse()
        .map_err(|_| ParseError::MalformedHeader {
            line: header.to_string(),
        })?;

    let mut clauses = Vec::with_capacity(n_clauses);
    let mut current: Vec<Lit> = Vec::new();
    for tok in lines.flat_map(|l| l.split_whitespace()) {
        let n: i32 = tok
            .parse()
            .map_err(|_| ParseError::InvalidToken(tok.to_string()))?;
        if n == 0 {
            clauses.push(std::mem::take(&mut current));
            continue;
        }
        let var = n.unsigned_abs();
        if var > n_vars {
            return Err(ParseError::VariableOutOfRange { var, nvars: n_vars });
        }
        current.push(Lit::new(n));
    }
    if !current.is_empty() {
        return Err(ParseError::UnterminatedClause);
    }

    Ok(Parsed { n_vars, clauses })
}

/// Convenience wrapper: parses `input` and loads it directly into a fresh
/// `Solver`.
pub fn build_solver(input: &str) -> Result<Solver, ParseError> {
    let parsed = parse(input)?;
    let mut s = Solver::new(parsed.n_vars);
    for c in parsed.clauses {
        s.add_clause(c);
    }
    Ok(s)
}
