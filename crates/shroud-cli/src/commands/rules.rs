use anyhow::Result;
use shroud_security::Redactor;
use std::io::Write;

pub fn handle(redactor: &Redactor) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_rules(redactor, &mut out)
}

fn write_rules(redactor: &Redactor, out: &mut impl Write) -> Result<()> {
    for rule in redactor.rules() {
        writeln!(
            out,
            "{:<10} {:<22} {}",
            rule.label(),
            rule.placeholder(),
            rule.pattern()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_builtin_rules_in_order() {
        let mut buf = Vec::new();
        write_rules(&Redactor::new(), &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let labels: Vec<_> = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();

        assert_eq!(labels, vec!["EMAIL", "IPV4", "API_KEY", "DB_URI"]);
        assert!(output.contains("<DB_URI_REDACTED>"));
    }
}
