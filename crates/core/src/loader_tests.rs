//! Tests for CSV loading, cell coercion and context construction.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::constants::{LAUREATES_FILE, PUBLICATIONS_FILE};
    use crate::{
        load_laureates, load_publications, parse_birth_date, parse_prize_year, Category,
        DashboardContext, DataLoadError, Gender,
    };

    const HEADER: &str = "prize_year,category,prize,full_name,gender,birth_date,birth_country";

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    fn laureates_csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out
    }

    #[test]
    fn birth_date_accepts_common_formats() {
        let expected = NaiveDate::from_ymd_opt(1867, 11, 7);
        assert_eq!(parse_birth_date("1867-11-07"), expected);
        assert_eq!(parse_birth_date("1867/11/07"), expected);
        assert_eq!(parse_birth_date("11/07/1867"), expected);
        assert_eq!(parse_birth_date("1867-11-07 00:00:00"), expected);
    }

    #[test]
    fn birth_date_coerces_garbage_to_none() {
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("   "), None);
        assert_eq!(parse_birth_date("1900-00-00"), None);
        assert_eq!(parse_birth_date("unknown"), None);
    }

    #[test]
    fn prize_year_accepts_integral_floats() {
        assert_eq!(parse_prize_year("1901"), Some(1901));
        assert_eq!(parse_prize_year(" 1901.0 "), Some(1901));
        assert_eq!(parse_prize_year("1901.5"), None);
        assert_eq!(parse_prize_year(""), None);
        assert_eq!(parse_prize_year("NaN"), None);
    }

    #[test]
    fn loads_rows_and_derives_age() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            LAUREATES_FILE,
            &laureates_csv(&[
                "2000,Physics,The Nobel Prize in Physics 2000,Jane Doe,Female,1950-01-01,Sweden",
                "1995,Peace,The Nobel Peace Prize 1995,Some Org,,,",
            ]),
        );

        let records = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].category, Some(Category::Physics));
        assert_eq!(records[0].gender, Gender::Female);
        assert_eq!(records[0].full_name, "Jane Doe");
        assert_eq!(records[0].age(), Some(50));

        assert_eq!(records[1].category, Some(Category::Peace));
        assert_eq!(records[1].gender, Gender::Other);
        assert_eq!(records[1].birth_date, None);
        assert_eq!(records[1].age(), None);
    }

    #[test]
    fn malformed_date_does_not_abort_load() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            LAUREATES_FILE,
            &laureates_csv(&[
                "1921,Physics,p,Albert Einstein,Male,1879-03-14,Germany",
                "1930,Chemistry,p,Mystery,Male,1880-13-45,Nowhere",
            ]),
        );

        let records = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age(), Some(42));
        assert_eq!(records[1].birth_date, None);
        assert_eq!(records[1].age(), None);
    }

    #[test]
    fn extreme_years_leave_age_unknown() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            LAUREATES_FILE,
            &laureates_csv(&[
                "-2147483648,physics,p,X,male,1950-01-01,",
                "2147483647,physics,p,Y,male,-5000-01-01,",
                "1950,physics,p,Z,male,-5000-01-01,",
            ]),
        );

        let records = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].prize_year, Some(i32::MIN));
        assert_eq!(records[0].age(), None);
        assert_eq!(records[1].birth_year(), Some(-5000));
        assert_eq!(records[1].age(), None);
        assert_eq!(records[2].age(), Some(6950));
    }

    #[test]
    fn unknown_category_is_none() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), LAUREATES_FILE, &laureates_csv(&["1950,Alchemy,p,X,Male,1900-01-01,"]));

        let records = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap();
        assert_eq!(records[0].category, None);
        assert_eq!(records[0].age(), Some(50));
    }

    #[test]
    fn short_rows_read_as_blank_cells() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), LAUREATES_FILE, &laureates_csv(&["1950,physics,p,Short Row"]));

        let records = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gender, Gender::Other);
        assert_eq!(records[0].age(), None);
    }

    #[test]
    fn missing_column_names_the_column() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), LAUREATES_FILE, "prize_year,category,full_name,gender\n2000,physics,A,male\n");

        let err = load_laureates(&dir.path().join(LAUREATES_FILE)).unwrap_err();
        match err {
            DataLoadError::MissingColumn { column, .. } => assert_eq!(column, "birth_date"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LAUREATES_FILE);

        let err = load_laureates(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }), "got {err:?}");
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn publications_keep_raw_rows() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PUBLICATIONS_FILE, "laureate_id,title\n1,On Things\n2,More Things\n");

        let table = load_publications(&dir.path().join(PUBLICATIONS_FILE)).unwrap();
        assert_eq!(table.headers, vec!["laureate_id", "title"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["2", "More Things"]);
    }

    #[test]
    fn context_requires_both_tables() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), LAUREATES_FILE, &laureates_csv(&["2000,physics,p,A,male,1950-01-01,"]));

        let err = DashboardContext::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound { .. }), "got {err:?}");
        assert!(err.to_string().contains(PUBLICATIONS_FILE));

        write(dir.path(), PUBLICATIONS_FILE, "title\n");
        let ctx = DashboardContext::load(dir.path()).unwrap();
        assert_eq!(ctx.laureates().len(), 1);
        assert!(ctx.publications().is_empty());
        assert_eq!(ctx.data_dir(), dir.path());
    }

    #[test]
    fn context_fails_on_missing_primary_table() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), PUBLICATIONS_FILE, "title\n");

        let err = DashboardContext::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(LAUREATES_FILE));
    }
}
