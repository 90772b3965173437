#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use polars::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::parsing::catalog_csv::{dataframe_to_titles, parse_catalog_csv};
    use crate::parsing::date::to_epoch_days;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    const RAW_HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in\n";

    #[test]
    fn test_parse_catalog_csv_basic() {
        let csv_content = format!(
            "{RAW_HEADER}s1,TV Show,Some Show,Jane Doe,\"A, B\",Spain,9-Sep-19,2019,TV-MA,3 Seasons,\"Dramas, TV Mysteries\"\n"
        );

        let temp_file = create_temp_csv(&csv_content);
        let result = parse_catalog_csv(temp_file.path());

        assert!(result.is_ok(), "Should parse basic CSV: {:?}", result.err());
        let df = result.unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 11);
    }

    #[test]
    fn test_release_year_cast_to_int32() {
        let csv_content = format!(
            "{RAW_HEADER}s1,TV Show,Some Show,Jane Doe,\"A, B\",Spain,9-Sep-19,2019,TV-MA,3 Seasons,Dramas\n"
        );

        let temp_file = create_temp_csv(&csv_content);
        let df = parse_catalog_csv(temp_file.path()).unwrap();

        assert_eq!(df.column("release_year").unwrap().dtype(), &DataType::Int32);
    }

    #[test]
    fn test_empty_cells_become_nulls() {
        let csv_content = format!(
            "{RAW_HEADER}s1,TV Show,Some Show,,,,9-Sep-19,2019,,1 Season,Dramas\n"
        );

        let temp_file = create_temp_csv(&csv_content);
        let df = parse_catalog_csv(temp_file.path()).unwrap();

        assert_eq!(df.column("director").unwrap().null_count(), 1);
        assert_eq!(df.column("cast").unwrap().null_count(), 1);
        assert_eq!(df.column("country").unwrap().null_count(), 1);
        assert_eq!(df.column("rating").unwrap().null_count(), 1);
    }

    fn sample_cleaned_df() -> DataFrame {
        let mut df = df!(
            "title" => &["Breaking Code"],
            "director" => &["Unknown"],
            "cast" => &["A, B"],
            "country" => &["Spain"],
            "release_year" => &[2021i32],
            "rating" => &["TV-MA"],
            "duration" => &[2i32],
            "first_release_year" => &[2019i32],
            "time_first_release_to_netflix" => &[2i32],
            "listed_in_Dramas" => &[true],
            "listed_in_TVMysteries" => &[false],
        )
        .unwrap();
        let days = vec![to_epoch_days(NaiveDate::from_ymd_opt(2021, 9, 24).unwrap())];
        df.with_column(
            Int32Chunked::from_vec("date_added".into(), days)
                .into_date()
                .into_series(),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_dataframe_to_titles_reads_scalars_and_flags() {
        let df = sample_cleaned_df();
        let records = dataframe_to_titles(&df, "listed_in").unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.title, "Breaking Code");
        assert_eq!(record.date_added, NaiveDate::from_ymd_opt(2021, 9, 24).unwrap());
        assert_eq!(record.duration, 2);
        assert_eq!(record.first_release_year, 2019);
        assert_eq!(record.categories, vec!["Dramas".to_string()]);
        assert!(record.has_category("Dramas"));
        assert!(!record.has_category("TVMysteries"));
    }

    #[test]
    fn test_dataframe_to_titles_requires_cleaned_columns() {
        // A raw-looking frame without the derived columns must not convert.
        let df = df!("title" => &["Some Show"]).unwrap();
        assert!(dataframe_to_titles(&df, "listed_in").is_err());
    }
}
