//! Unit tests for tq-catalog.

use std::io::{Cursor, Write};

use tq_core::{DepartmentId, PersonType};

use crate::loader::load_branches_reader;
use crate::{
    CatalogError, CsvFileCatalog, DepartmentCatalog, Department, JsonFileCatalog, StaticCatalog,
    load_departments_csv_reader, load_departments_json_reader,
};

const ENVELOPE_JSON: &str = r#"{
  "branches": [
    {
      "Biskvit_id": 5003,
      "address": "Москва, ул. Мясницкая, 35",
      "city": "Москва",
      "coordinates": {"latitude": 55.766, "longitude": 37.641},
      "id": 17,
      "scheduleFl": "пн-пт: 09:00-20:00",
      "scheduleJurL": "пн-пт: 10:00-18:00",
      "shortName": "ДО «Мясницкий»",
      "special": {"prime": false, "juridical": true, "person": true, "ramp": true, "vipOffice": false, "vipZone": false}
    },
    {"id": 18, "scheduleFl": null, "scheduleJurL": "09.30-17.30"}
  ]
}"#;

#[cfg(test)]
mod json {
    use super::*;

    #[test]
    fn envelope_keeps_order_and_fields() {
        let deps = load_departments_json_reader(Cursor::new(ENVELOPE_JSON)).unwrap();
        assert_eq!(deps.len(), 2);

        let first = &deps[0];
        assert_eq!(first.id, DepartmentId(17));
        assert_eq!(first.biskvit_id, Some(5003));
        assert_eq!(first.schedule(PersonType::Physical), "пн-пт: 09:00-20:00");
        assert_eq!(first.schedule(PersonType::Juridical), "пн-пт: 10:00-18:00");
        assert_eq!(first.coordinates.as_ref().unwrap().latitude, Some(55.766));
        let special = first.special.as_ref().unwrap();
        assert!(special.juridical && special.ramp && !special.vip_office);

        assert_eq!(deps[1].id, DepartmentId(18));
        assert_eq!(deps[1].schedule(PersonType::Physical), "");
        assert_eq!(deps[1].schedule(PersonType::Juridical), "09.30-17.30");
    }

    #[test]
    fn bare_array_accepted() {
        let json = r#"[{"id": 1, "scheduleFl": "09:00-18:00", "scheduleJurL": "10:00-17:00"}]"#;
        let deps = load_departments_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(deps, vec![Department::new(1, "09:00-18:00", "10:00-17:00")]);
    }

    #[test]
    fn missing_id_rejected() {
        let json = r#"{"branches": [{"scheduleFl": "09:00-18:00"}]}"#;
        assert!(load_departments_json_reader(Cursor::new(json)).is_err());
    }

    #[test]
    fn envelope_without_branches_rejected() {
        for body in [r#"{}"#, r#"{"error": "service unavailable"}"#] {
            assert!(matches!(load_departments_json_reader(Cursor::new(body)), Err(CatalogError::Json(_))));
            assert!(matches!(load_branches_reader(Cursor::new(body)), Err(CatalogError::Json(_))));
        }
    }

    #[test]
    fn response_body_requires_envelope() {
        let deps = load_branches_reader(Cursor::new(ENVELOPE_JSON)).unwrap();
        assert_eq!(deps.len(), 2);
        assert!(load_branches_reader(Cursor::new(r#"{"branches": []}"#)).unwrap().is_empty());
        assert!(load_branches_reader(Cursor::new(r#"[{"id": 1}]"#)).is_err());
    }

    #[test]
    fn serialises_with_upstream_field_names() {
        let json = serde_json::to_string(&Department::new(3, "a", "b")).unwrap();
        assert!(json.contains("\"scheduleFl\":\"a\""));
        assert!(json.contains("\"scheduleJurL\":\"b\""));
        assert!(json.contains("\"Biskvit_id\""));
    }
}

#[cfg(test)]
mod csv_loader {
    use super::*;

    #[test]
    fn full_columns() {
        let csv = "\
id,scheduleFl,scheduleJurL,shortName,city,address
1,09:00-18:00,10:00-17:00,Central,Moscow,Tverskaya 1
2,пн-пт 09.30-19.00,,North,,
";
        let deps = load_departments_csv_reader(Cursor::new(csv)).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].short_name.as_deref(), Some("Central"));
        assert_eq!(deps[1].schedule(PersonType::Physical), "пн-пт 09.30-19.00");
        assert_eq!(deps[1].schedule(PersonType::Juridical), "");
        assert_eq!(deps[1].city, None);
    }

    #[test]
    fn minimal_columns() {
        let csv = "id,scheduleJurL\n7,08:00-16:00\n";
        let deps = load_departments_csv_reader(Cursor::new(csv)).unwrap();
        assert_eq!(deps[0].id, DepartmentId(7));
        assert_eq!(deps[0].schedule(PersonType::Juridical), "08:00-16:00");
        assert_eq!(deps[0].schedule_fl, None);
    }

    #[test]
    fn non_numeric_id_rejected() {
        let csv = "id,scheduleFl,scheduleJurL\nabc,09:00-18:00,09:00-18:00\n";
        assert!(load_departments_csv_reader(Cursor::new(csv)).is_err());
    }
}

#[cfg(test)]
mod catalogs {
    use super::*;

    #[test]
    fn static_catalog_returns_its_list() {
        let list = vec![Department::new(1, "x", "y"), Department::new(2, "x", "y")];
        let loaded = StaticCatalog(list.clone()).load().unwrap();
        assert_eq!(loaded, list);
    }

    #[test]
    fn json_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ENVELOPE_JSON.as_bytes()).unwrap();
        let deps = JsonFileCatalog::new(file.path()).load().unwrap();
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn csv_file_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id,scheduleFl,scheduleJurL\n4,09:00-18:00,09:00-18:00\n").unwrap();
        let deps = CsvFileCatalog::new(file.path()).load().unwrap();
        assert_eq!(deps, vec![Department::new(4, "09:00-18:00", "09:00-18:00")]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JsonFileCatalog::new("/definitely/not/here.json").load().unwrap_err();
        assert!(matches!(err, crate::CatalogError::Io(_)));
    }
}
