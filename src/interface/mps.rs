//! Reader for fixed-field [MPS](https://en.wikipedia.org/wiki/MPS_(format))
//! files.
//!
//! Sections are handled in the order usually found in the format: `NAME`,
//! optional `OBJSENSE`/`OBJNAME`, `ROWS` (`N` names the free objective row),
//! `COLUMNS`, `RHS`, `BOUNDS` (`LO`, `UP`, `FX`, `FR`), then `ENDATA`.
//! Records are tokenised by whitespace, so both the 3-token and 4-token
//! (bound-set-named) `BOUNDS` forms are accepted. `RANGES` is not supported.

use std::fs;
use std::path::Path;

use derive_more::{Display, Error as DeriveError};
use tracing::debug;

use crate::Error;
use crate::model::{Model, Relation, Sense};

/// Errors raised while reading an MPS file.
#[derive(Debug, Clone, Display, DeriveError, PartialEq, Eq)]
pub enum MpsError {
    #[display("file does not exist: {path}")]
    MissingFile { path: String },

    #[display("unknown section header: {header}")]
    UnknownSection { header: String },

    #[display("MPS section {section} is not supported")]
    UnsupportedSection { section: String },

    #[display("unsupported bound {bound} for variable {variable}")]
    UnsupportedBound { bound: String, variable: String },

    #[display("{message}")]
    ParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Name,
    ObjSense,
    ObjName,
    Rows,
    Columns,
    Rhs,
    Bounds,
    End,
}

/// Reads an MPS file into a [`Model`].
pub fn read_mps(path: impl AsRef<Path>) -> Result<Model, Error> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MpsError::MissingFile {
            path: path.display().to_string(),
        }
        .into());
    }

    let contents = fs::read_to_string(path).map_err(|err| MpsError::ParseError {
        message: format!("file could not be opened: {} ({err})", path.display()),
    })?;

    debug!("file {} has {} lines", path.display(), contents.lines().count());

    read_mps_str(&contents)
}

/// Reads MPS records from an in-memory string.
pub fn read_mps_str(contents: &str) -> Result<Model, Error> {
    let mut model: Option<Model> = None;
    let mut section = Section::None;

    for line in contents.lines() {
        debug!("|{line}");
        process_record(&mut model, &mut section, line)?;
    }

    model.ok_or_else(|| {
        MpsError::ParseError {
            message: "no model created".to_string(),
        }
        .into()
    })
}

fn process_record(
    model: &mut Option<Model>,
    section: &mut Section,
    line: &str,
) -> Result<(), Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(());
    }

    if is_indicator_record(line) {
        *section = record_to_section(words[0])?;
        if *section == Section::Name {
            *model = Some(Model::new(Sense::Min, words.get(1).copied().unwrap_or("Unnamed")));
        }
        return Ok(());
    }

    let model = model.as_mut().ok_or_else(|| MpsError::ParseError {
        message: "data record before NAME section".to_string(),
    })?;

    match *section {
        Section::ObjSense => process_objsense_record(model, &words),
        Section::ObjName => {
            model.set_objective_name(words[0]);
            Ok(())
        }
        Section::Rows => process_rows_record(model, &words),
        Section::Columns => process_columns_record(model, &words),
        Section::Rhs => process_rhs_record(model, &words),
        Section::Bounds => process_bounds_record(model, &words),
        _ => Ok(()),
    }
}

/// Section headers start in the first column; data records are indented.
fn is_indicator_record(line: &str) -> bool {
    line.chars().next().is_some_and(|front| front.is_ascii_alphabetic())
}

fn record_to_section(header: &str) -> Result<Section, MpsError> {
    match header {
        "NAME" => Ok(Section::Name),
        "OBJSENSE" => Ok(Section::ObjSense),
        "OBJNAME" => Ok(Section::ObjName),
        "ROWS" => Ok(Section::Rows),
        "COLUMNS" => Ok(Section::Columns),
        "RHS" => Ok(Section::Rhs),
        "BOUNDS" => Ok(Section::Bounds),
        "ENDATA" => Ok(Section::End),
        "RANGES" => Err(MpsError::UnsupportedSection {
            section: "RANGES".to_string(),
        }),
        other => Err(MpsError::UnknownSection {
            header: other.to_string(),
        }),
    }
}

fn process_objsense_record(model: &mut Model, words: &[&str]) -> Result<(), Error> {
    match words[0] {
        "MAX" | "MAXIMIZE" => model.set_sense(Sense::Max),
        "MIN" | "MINIMIZE" => model.set_sense(Sense::Min),
        other => {
            return Err(MpsError::ParseError {
                message: format!("unknown OBJSENSE value: {other}"),
            }
            .into());
        }
    }
    Ok(())
}

fn process_rows_record(model: &mut Model, words: &[&str]) -> Result<(), Error> {
    let [row_type, row_name] = words else {
        return Err(MpsError::ParseError {
            message: format!("malformed ROWS record: {}", words.join(" ")),
        }
        .into());
    };

    match *row_type {
        "N" => model.set_objective_name(row_name),
        "G" => {
            model.make_constraint(Relation::Greater, row_name)?;
        }
        "L" => {
            model.make_constraint(Relation::Less, row_name)?;
        }
        "E" => {
            model.make_constraint(Relation::Equal, row_name)?;
        }
        other => {
            return Err(MpsError::ParseError {
                message: format!("unknown ROWS type: {other}"),
            }
            .into());
        }
    }
    Ok(())
}

fn parse_value(word: &str) -> Result<f64, MpsError> {
    word.parse().map_err(|_| MpsError::ParseError {
        message: format!("could not parse numeric field: {word}"),
    })
}

fn process_columns_record(model: &mut Model, words: &[&str]) -> Result<(), Error> {
    let variable_name = words[0];
    if model.variable(variable_name).is_none() {
        model.make_variable(variable_name)?;
    }

    for pair in words[1..].chunks(2) {
        let [row_name, value] = pair else {
            return Err(MpsError::ParseError {
                message: format!("malformed COLUMNS record: {}", words.join(" ")),
            }
            .into());
        };
        let value = parse_value(value)?;

        if model.objective_name() == *row_name {
            // Pair is specifying the objective coefficient of this variable
            if let Some(variable) = model.variable_mut(variable_name) {
                variable.set_cost(value);
            }
        } else {
            // Pair is specifying the entries of a constraint
            let Some(constraint) = model.constraint_mut(row_name) else {
                return Err(MpsError::ParseError {
                    message: format!("constraint not found: {row_name}"),
                }
                .into());
            };
            constraint.add_to_lhs(value, variable_name);
        }
    }
    Ok(())
}

fn process_rhs_record(model: &mut Model, words: &[&str]) -> Result<(), Error> {
    // An odd token count means the record leads with an RHS set name.
    let pairs = if words.len() % 2 == 1 { &words[1..] } else { words };

    for pair in pairs.chunks(2) {
        let [constraint_name, value] = pair else {
            return Err(MpsError::ParseError {
                message: format!("malformed RHS record: {}", words.join(" ")),
            }
            .into());
        };
        let value = parse_value(value)?;

        let Some(constraint) = model.constraint_mut(constraint_name) else {
            return Err(MpsError::ParseError {
                message: format!("constraint not found: {constraint_name}"),
            }
            .into());
        };
        constraint.set_rhs(value);
    }
    Ok(())
}

fn process_bounds_record(model: &mut Model, words: &[&str]) -> Result<(), Error> {
    // A bounds record may carry a bound-set name:
    //   LO INTBOU    GRDTIMN1         -105
    //   UP           C03609             14
    //   FR BND       x2
    let bound_type = words[0];

    match bound_type {
        "LO" | "UP" | "FX" => {
            let (variable_name, value) = match words {
                [_, variable, value] => (*variable, parse_value(value)?),
                [_, _, variable, value] => (*variable, parse_value(value)?),
                _ => {
                    return Err(MpsError::ParseError {
                        message: format!("malformed BOUNDS record: {}", words.join(" ")),
                    }
                    .into());
                }
            };

            if (bound_type == "UP" || bound_type == "FX") && value < 0.0 {
                // Negative variables are not handled by the simplex standard form.
                return Err(MpsError::UnsupportedBound {
                    bound: format!("{bound_type} {value}"),
                    variable: variable_name.to_string(),
                }
                .into());
            }

            let Some(variable) = model.variable_mut(variable_name) else {
                return Err(MpsError::ParseError {
                    message: format!("variable not found: {variable_name}"),
                }
                .into());
            };

            match bound_type {
                "LO" => variable.set_lower_bound(value),
                "UP" => variable.set_upper_bound(value),
                _ => {
                    variable.set_lower_bound(value);
                    variable.set_upper_bound(value);
                }
            }
        }
        "FR" => {
            let variable_name = words[words.len() - 1];
            let Some(variable) = model.variable_mut(variable_name) else {
                return Err(MpsError::ParseError {
                    message: format!("variable not found: {variable_name}"),
                }
                .into());
            };
            variable.set_lower_bound(f64::NEG_INFINITY);
            variable.set_upper_bound(f64::INFINITY);
        }
        other => {
            return Err(MpsError::UnsupportedBound {
                bound: other.to_string(),
                variable: words.last().copied().unwrap_or_default().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relation;

    const EXAMPLE1: &str = include_str!("../../data/example1.mps");

    #[test]
    fn reads_example_model_attributes() {
        let model = read_mps_str(EXAMPLE1).unwrap();

        assert_eq!(model.name(), "TESTPROB");
        assert_eq!(model.objective_name(), "COST");
        assert_eq!(model.sense(), Sense::Min);
        assert_eq!(model.n_constraints(), 3);
        assert_eq!(model.n_variables(), 3);
    }

    #[test]
    fn reads_example_variables() {
        let model = read_mps_str(EXAMPLE1).unwrap();

        let x1 = model.variable("XONE").unwrap();
        let y2 = model.variable("YTWO").unwrap();
        let z3 = model.variable("ZTHREE").unwrap();

        assert_eq!(x1.cost(), 1.0);
        assert_eq!(y2.cost(), 4.0);
        assert_eq!(z3.cost(), 9.0);

        assert_eq!(x1.lower_bound(), 0.0);
        assert_eq!(x1.upper_bound(), 4.0);
        assert_eq!(y2.lower_bound(), 1.0);
        assert_eq!(y2.upper_bound(), 1.0);
        assert_eq!(z3.lower_bound(), 0.0);
        assert_eq!(z3.upper_bound(), f64::INFINITY);
    }

    #[test]
    fn reads_example_constraints() {
        let model = read_mps_str(EXAMPLE1).unwrap();

        let lim1 = model.constraint("LIM1").unwrap();
        assert_eq!(lim1.relation(), Relation::Less);
        assert_eq!(lim1.rhs(), 5.0);
        assert_eq!(lim1.entries().len(), 2);
        assert_eq!(lim1.coefficient("XONE"), 1.0);
        assert_eq!(lim1.coefficient("YTWO"), 1.0);

        let lim2 = model.constraint("LIM2").unwrap();
        assert_eq!(lim2.relation(), Relation::Greater);
        assert_eq!(lim2.rhs(), 10.0);
        assert_eq!(lim2.coefficient("XONE"), 1.0);
        assert_eq!(lim2.coefficient("ZTHREE"), 1.0);

        let myeqn = model.constraint("MYEQN").unwrap();
        assert_eq!(myeqn.relation(), Relation::Equal);
        assert_eq!(myeqn.rhs(), 7.0);
        assert_eq!(myeqn.coefficient("YTWO"), -1.0);
        assert_eq!(myeqn.coefficient("ZTHREE"), 1.0);
    }

    #[test]
    fn reads_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/example1.mps");
        let model = read_mps(path).unwrap();
        assert_eq!(model.name(), "TESTPROB");
        assert_eq!(model.n_variables(), 3);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_mps("no/such/file.mps");
        assert!(matches!(
            result,
            Err(Error::Mps(MpsError::MissingFile { .. }))
        ));
    }

    #[test]
    fn nameless_name_record_yields_unnamed_model() {
        let model = read_mps_str("NAME\nROWS\n N  obj\nENDATA\n").unwrap();
        assert_eq!(model.name(), "Unnamed");
    }

    #[test]
    fn objsense_section_sets_the_sense() {
        let model = read_mps_str("NAME  M\nOBJSENSE\n    MAX\nROWS\n N  obj\nENDATA\n").unwrap();
        assert_eq!(model.sense(), Sense::Max);
    }

    #[test]
    fn free_bound_record_frees_the_variable() {
        let contents = "NAME  M\nROWS\n N  obj\n L  C1\nCOLUMNS\n    x2  C1  1\nRHS\n    RHS1  C1  4\nBOUNDS\n FR BND  x2\nENDATA\n";
        let model = read_mps_str(contents).unwrap();
        assert!(model.variable("x2").unwrap().is_free());
    }

    #[test]
    fn ranges_section_is_rejected() {
        let result = read_mps_str("NAME  M\nROWS\n N  obj\nRANGES\nENDATA\n");
        assert!(matches!(
            result,
            Err(Error::Mps(MpsError::UnsupportedSection { .. }))
        ));
    }

    #[test]
    fn unknown_section_header_is_rejected() {
        let result = read_mps_str("NAME  M\nQUADOBJ\nENDATA\n");
        assert!(matches!(
            result,
            Err(Error::Mps(MpsError::UnknownSection { header })) if header == "QUADOBJ"
        ));
    }

    #[test]
    fn negative_upper_bound_is_rejected() {
        let contents = "NAME  M\nROWS\n N  obj\nCOLUMNS\n    x1  obj  1\nBOUNDS\n UP BND  x1  -3\nENDATA\n";
        let result = read_mps_str(contents);
        assert!(matches!(
            result,
            Err(Error::Mps(MpsError::UnsupportedBound { variable, .. })) if variable == "x1"
        ));
    }

    #[test]
    fn unknown_rows_type_is_rejected() {
        let result = read_mps_str("NAME  M\nROWS\n X  C1\nENDATA\n");
        assert!(matches!(result, Err(Error::Mps(MpsError::ParseError { .. }))));
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let contents = "NAME  M\nROWS\n N  obj\n L  C1\nCOLUMNS\n    x1  C1  abc\nENDATA\n";
        let result = read_mps_str(contents);
        assert!(matches!(result, Err(Error::Mps(MpsError::ParseError { .. }))));
    }

    #[test]
    fn empty_input_creates_no_model() {
        assert!(matches!(
            read_mps_str(""),
            Err(Error::Mps(MpsError::ParseError { .. }))
        ));
    }
}
