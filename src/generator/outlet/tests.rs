#[cfg(test)]
mod tests {
    use crate::generator::outlet::{escape, render_module};
    use crate::types::workshop::{Semester, Team, Workshop, WorkshopTable};

    #[test]
    fn test_render_header_declarations() {
        let module = render_module(&WorkshopTable::new());

        assert!(module.starts_with("export type semesters = 'fa24' | 'sp25' | 'fa25';\n"));
        assert!(module.contains("export type teams =\n\t| 'ai'\n"));
        assert!(module.contains("\t| 'oss';\n"));
        assert!(module.contains("const sSc = new Map<string, string>();\n"));
        assert!(module.contains("sSc.set('f24', 'fa24');\n"));
        assert!(module.contains("sSc.set('s26', 'sp26');\n"));
        assert!(module.contains("export interface WorkshopInfo {\n"));
    }

    #[test]
    fn test_render_empty_table_is_total() {
        let module = render_module(&WorkshopTable::new());

        // Every (team, semester) bucket appears even when empty
        for team in Team::ALL {
            assert!(module.contains(&format!("\t{}: {{\n\t\tworkshops: {{\n", team)));
        }
        assert_eq!(module.matches(": [\n").count(), 27);
        assert!(!module.contains("{ name:"));
    }

    #[test]
    fn test_render_trailing_comma_placement() {
        let module = render_module(&WorkshopTable::new());

        // Non-final semesters carry a comma, the final one does not
        assert!(module.contains("\t\t\tfa24: [\n\t\t\t],\n"));
        assert!(module.contains("\t\t\tsp25: [\n\t\t\t],\n"));
        assert!(module.contains("\t\t\tfa25: [\n\t\t\t]\n"));

        // The final team closes without a comma, straight into the accessor
        assert!(module.ends_with(
            "\t\t}\n\t}\n}\nexport async function NewWorkshopTable() {\n\treturn currentTable;\n}\n"
        ));
    }

    #[test]
    fn test_render_workshop_record_line() {
        let mut table = WorkshopTable::new();
        table.insert(Workshop {
            name: "Intro to Git & GitHub".to_string(),
            team: Team::Dev,
            semester: Semester::Fa24,
            link: "https://example.com/intro".to_string(),
        });

        let module = render_module(&table);
        assert!(module.contains(
            "\t\t\t\t{ name: \"Intro to Git & GitHub\", team: \"dev\", semester: \"fa24\", link: \"https://example.com/intro\" },\n"
        ));
    }

    #[test]
    fn test_escape_rules() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("Rock &#39;n&#39; Roll"), "Rock 'n' Roll");
    }

    #[test]
    fn test_record_order_within_bucket_is_insertion_order() {
        let mut table = WorkshopTable::new();
        for name in ["First", "Second", "Third"] {
            table.insert(Workshop {
                name: name.to_string(),
                team: Team::Algo,
                semester: Semester::Sp25,
                link: "https://example.com".to_string(),
            });
        }

        let module = render_module(&table);
        let first = module.find("First").unwrap();
        let second = module.find("Second").unwrap();
        let third = module.find("Third").unwrap();
        assert!(first < second && second < third);
    }
}
