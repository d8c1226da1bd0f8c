use std::io::Write as _;

use pretty_assertions::assert_eq;

use propex_refactor::RefactorError;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

fn source_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".cs").tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

const PERSON: &str = "\
public class Person
{
    public string Name { get; set; }

    private int _age;
    public int Age { get { return _age; } }

    public int Total => _a + _b;
}
";

#[test]
fn test_from_args() {
    assert_eq!(
        Command::from_args("explode", &args(&["A.cs", "Name", "--write"])).unwrap(),
        Command::Explode {
            file: PathBuf::from("A.cs"),
            property: "Name".to_owned(),
            write: true,
        }
    );
    assert_eq!(
        Command::from_args("classify", &args(&["A.cs", "Person.Age"])).unwrap(),
        Command::Classify {
            file: PathBuf::from("A.cs"),
            property: "Person.Age".to_owned(),
        }
    );
    assert_eq!(
        Command::from_args("parse", &args(&["A.cs"])).unwrap(),
        Command::Parse {
            file: PathBuf::from("A.cs"),
        }
    );
}

#[test]
fn test_from_args_rejects() {
    for (name, rest) in [
        ("explode", &["A.cs"][..]),
        ("crunch", &["A.cs", "Age", "Extra"][..]),
        ("parse", &["A.cs", "--write"][..]),
        ("classify", &["A.cs", "Age", "--force"][..]),
        ("rename", &["A.cs", "Age"][..]),
    ] {
        let result = Command::from_args(name, &args(rest));
        assert!(matches!(result, Err(CliError::Usage(_))), "{name} {rest:?}");
    }
}

#[test]
fn test_parse_lists_properties() {
    let file = source_file(PERSON);
    let command = Command::Parse {
        file: file.path().to_path_buf(),
    };
    let outcome = run(&command).unwrap();
    assert_eq!(
        outcome.stdout,
        "/0/0\tPerson.Name\texplode\n/0/2\tPerson.Age\tcrunch\n/0/3\tPerson.Total\tnone\n"
    );
    assert_eq!(outcome.note, None);
}

#[test]
fn test_classify() {
    let file = source_file(PERSON);
    for (property, expected) in [("Name", "explode\n"), ("Age", "crunch\n"), ("Total", "none\n")] {
        let command = Command::Classify {
            file: file.path().to_path_buf(),
            property: property.to_owned(),
        };
        assert_eq!(run(&command).unwrap().stdout, expected, "{property}");
    }
}

#[test]
fn test_explode_prints_rewritten_source() {
    let file = source_file(PERSON);
    let command = Command::Explode {
        file: file.path().to_path_buf(),
        property: "Name".to_owned(),
        write: false,
    };
    let outcome = run(&command).unwrap();
    assert!(outcome.stdout.contains(
        "    private string _name;\n    public string Name { get { return _name; } set { _name = value; } }\n"
    ));
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), PERSON);
}

#[test]
fn test_crunch_writes_in_place() {
    let file = source_file(PERSON);
    let command = Command::Crunch {
        file: file.path().to_path_buf(),
        property: "Age".to_owned(),
        write: true,
    };
    let outcome = run(&command).unwrap();
    assert_eq!(outcome.stdout, "");
    assert!(outcome.note.is_some());
    let written = std::fs::read_to_string(file.path()).unwrap();
    assert!(written.contains("    public int Age { get; private set; }\n"));
    assert!(!written.contains("_age"));
}

#[test]
fn test_crunch_without_backing_field_leaves_source() {
    let file = source_file("class C\n{\n    int Value { get { return Compute(); } }\n}\n");
    let command = Command::Crunch {
        file: file.path().to_path_buf(),
        property: "Value".to_owned(),
        write: true,
    };
    let outcome = run(&command).unwrap();
    assert_eq!(outcome.stdout, "");
    assert!(outcome.note.is_some());
    assert_eq!(
        std::fs::read_to_string(file.path()).unwrap(),
        "class C\n{\n    int Value { get { return Compute(); } }\n}\n"
    );
}

#[test]
fn test_errors() {
    let file = source_file(PERSON);
    let unknown = Command::Classify {
        file: file.path().to_path_buf(),
        property: "Missing".to_owned(),
    };
    assert!(matches!(
        run(&unknown),
        Err(CliError::UnknownProperty { query, .. }) if query == "Missing"
    ));

    let not_explodable = Command::Explode {
        file: file.path().to_path_buf(),
        property: "Total".to_owned(),
        write: false,
    };
    assert!(matches!(
        run(&not_explodable),
        Err(CliError::Refactor(RefactorError::NotExplodable { .. }))
    ));

    let missing_file = Command::Parse {
        file: PathBuf::from("does/not/exist.cs"),
    };
    assert!(matches!(run(&missing_file), Err(CliError::Io { .. })));

    let broken = source_file("class C {\n");
    let parse = Command::Parse {
        file: broken.path().to_path_buf(),
    };
    assert!(matches!(run(&parse), Err(CliError::Parse { .. })));
}
