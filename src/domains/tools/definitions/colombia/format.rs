//! Text rendering for API Colombia payloads.
//!
//! Every function here is pure: the same payload always renders to the same
//! bytes. Numbers are grouped with the `en-US` convention (`1,234,567`).

use super::models::{CountryData, DepartmentData, RegionData};

/// Width of the separator rules.
pub const RULE_WIDTH: usize = 80;

/// Placeholder for a department whose region could not be resolved.
pub const UNSPECIFIED_REGION: &str = "No especificada";

/// Placeholder for a region without a department list.
pub const UNSPECIFIED_DEPARTMENTS: &str = "No especificados";

/// Placeholder for the region name in the by-region header.
pub const UNKNOWN_REGION: &str = "DESCONOCIDA";

/// Placeholder for missing numeric references.
const UNKNOWN_ID: &str = "desconocido";

/// Rule framing headers and detail blocks.
pub fn heavy_rule() -> String {
    "═".repeat(RULE_WIDTH)
}

/// Rule closing each item of a list.
pub fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Format a number with `,` thousands separators and at most three
/// fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn optional_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| UNKNOWN_ID.to_string())
}

/// Header, then one block per item; each block closed by a light rule.
fn render_list(title: &str, total_label: &str, blocks: Vec<String>) -> String {
    let mut text = format!(
        "{}\n{}: {}\n{}",
        title,
        total_label,
        blocks.len(),
        heavy_rule()
    );

    let items: Vec<String> = blocks
        .into_iter()
        .map(|block| format!("{}\n{}", block, light_rule()))
        .collect();

    if !items.is_empty() {
        text.push_str("\n\n");
        text.push_str(&items.join("\n\n"));
    }

    text.trim().to_string()
}

/// Title, heavy rule, the block, heavy rule.
fn render_detail(title: &str, block: &str) -> String {
    let rule = heavy_rule();
    format!("{}\n{}\n\n{}\n\n{}", title, rule, block, rule)
        .trim()
        .to_string()
}

// ============================================================================
// Country
// ============================================================================

pub fn render_country(country: &CountryData) -> String {
    format!(
        "Country: {name}\n\
         Capital: {capital}\n\
         Population: {population}\n\
         Area: {surface} km²\n\
         Region: {region} - {sub_region}\n\
         Languages: {languages}\n\
         Currency: {currency} ({code} {symbol})\n\
         Time Zone: {time_zone}\n\
         ISO Code: {iso}\n\
         Internet Domain: {domain}\n\
         Phone Prefix: {phone}\n\
         Borders: {borders}\n\
         \n\
         Description:\n\
         {description}\n\
         \n\
         Flag URLs:\n\
         {flags}",
        name = country.name,
        capital = country.state_capital,
        population = format_number(country.population),
        surface = format_number(country.surface),
        region = country.region,
        sub_region = country.sub_region,
        languages = country.languages.join(", "),
        currency = country.currency,
        code = country.currency_code,
        symbol = country.currency_symbol,
        time_zone = country.time_zone,
        iso = country.iso_code,
        domain = country.internet_domain,
        phone = country.phone_prefix,
        borders = country.borders.join(", "),
        description = country.description,
        flags = country.flags.join("\n"),
    )
    .trim()
    .to_string()
}

// ============================================================================
// Regions
// ============================================================================

fn region_block(region: &RegionData) -> String {
    let departments = match &region.departments {
        Some(names) => names.join(", "),
        None => UNSPECIFIED_DEPARTMENTS.to_string(),
    };

    format!(
        "🌎 REGIÓN: {}\n📍 ID: {}\n📝 Descripción: {}\n🏛️ Departamentos: {}",
        region.name, region.id, region.description, departments
    )
}

pub fn render_region_list(regions: &[RegionData]) -> String {
    render_list(
        "🇨🇴 REGIONES DE COLOMBIA",
        "Total de regiones",
        regions.iter().map(region_block).collect(),
    )
}

pub fn render_region_detail(region: &RegionData) -> String {
    render_detail("🇨🇴 DETALLE DE LA REGIÓN", &region_block(region))
}

// ============================================================================
// Departments
// ============================================================================

fn department_block(dept: &DepartmentData) -> String {
    let region_id = dept.region_id.or(dept.region.as_ref().map(|r| r.id));

    format!(
        "🏛️ DEPARTAMENTO: {name}\n\
         📍 ID: {id}\n\
         📝 Descripción: {description}\n\
         🏙️ Capital: ID {capital}\n\
         🏘️ Municipios: {municipalities}\n\
         📏 Superficie: {surface} km²\n\
         👥 Población: {population} habitantes\n\
         📞 Prefijo telefónico: {phone}\n\
         🌎 Región: {region} (ID: {region_id})",
        name = dept.name,
        id = dept.id,
        description = dept.description,
        capital = optional_id(dept.city_capital_id),
        municipalities = dept.municipalities,
        surface = format_number(dept.surface),
        population = format_number(dept.population),
        phone = dept.phone_prefix,
        region = dept.region_name().unwrap_or(UNSPECIFIED_REGION),
        region_id = optional_id(region_id),
    )
}

pub fn render_all_departments(departments: &[DepartmentData]) -> String {
    render_list(
        "🇨🇴 TODOS LOS DEPARTAMENTOS DE COLOMBIA",
        "Total de departamentos",
        departments.iter().map(department_block).collect(),
    )
}

/// The header names the region of the first department.
pub fn render_region_departments(departments: &[DepartmentData]) -> String {
    let region = departments
        .first()
        .and_then(DepartmentData::region_name)
        .map(str::to_uppercase)
        .unwrap_or_else(|| UNKNOWN_REGION.to_string());

    render_list(
        &format!("🇨🇴 DEPARTAMENTOS DE LA REGIÓN {}", region),
        "Total de departamentos",
        departments.iter().map(department_block).collect(),
    )
}

pub fn render_department_detail(dept: &DepartmentData) -> String {
    render_detail("🇨🇴 DETALLE DEL DEPARTAMENTO", &department_block(dept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::colombia::models::RegionRef;

    fn region(id: i64, name: &str, departments: Option<Vec<&str>>) -> RegionData {
        RegionData {
            id,
            name: name.to_string(),
            description: format!("Región {}", name),
            departments: departments.map(|d| d.into_iter().map(String::from).collect()),
        }
    }

    fn department(id: i64, name: &str, region: Option<&str>) -> DepartmentData {
        DepartmentData {
            id,
            name: name.to_string(),
            description: "Departamento de prueba".to_string(),
            city_capital_id: Some(100 + id),
            municipalities: 42,
            surface: 1234567.0,
            population: 6407102.0,
            phone_prefix: "604".to_string(),
            region_id: Some(2),
            region: region.map(|name| RegionRef {
                id: 2,
                name: Some(name.to_string()),
                description: None,
            }),
        }
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(1141748.0), "1,141,748");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(2345.5), "2,345.5");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(10.0004), "10");
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_rules_are_80_chars() {
        assert_eq!(heavy_rule().chars().count(), 80);
        assert_eq!(light_rule().chars().count(), 80);
    }

    #[test]
    fn test_region_list_header_and_blocks() {
        let regions = vec![
            region(1, "Caribe", Some(vec!["Atlántico", "Bolívar"])),
            region(2, "Andina", None),
            region(3, "Pacífico", Some(vec![])),
        ];
        let text = render_region_list(&regions);

        assert!(text.starts_with("🇨🇴 REGIONES DE COLOMBIA\nTotal de regiones: 3\n"));
        assert_eq!(text.matches("🌎 REGIÓN:").count(), 3);
        assert_eq!(text.matches(&light_rule()).count(), 3);
        assert!(text.ends_with(&light_rule()));
        assert!(text.contains("🏛️ Departamentos: Atlántico, Bolívar"));
        assert!(text.contains("🏛️ Departamentos: No especificados"));
        assert!(text.contains("🏛️ Departamentos: \n"));
    }

    #[test]
    fn test_region_list_empty() {
        let text = render_region_list(&[]);
        assert_eq!(
            text,
            format!("🇨🇴 REGIONES DE COLOMBIA\nTotal de regiones: 0\n{}", heavy_rule())
        );
    }

    #[test]
    fn test_region_detail_is_bordered() {
        let text = render_region_detail(&region(4, "Orinoquía", None));
        let rule = heavy_rule();
        assert!(text.starts_with(&format!("🇨🇴 DETALLE DE LA REGIÓN\n{}\n\n🌎 REGIÓN: Orinoquía", rule)));
        assert!(text.ends_with(&format!("No especificados\n\n{}", rule)));
    }

    #[test]
    fn test_department_block_fields() {
        let text = render_department_detail(&department(5, "Antioquia", Some("Eje Cafetero")));
        assert!(text.contains("🏛️ DEPARTAMENTO: Antioquia\n📍 ID: 5\n"));
        assert!(text.contains("🏙️ Capital: ID 105"));
        assert!(text.contains("📏 Superficie: 1,234,567 km²"));
        assert!(text.contains("👥 Población: 6,407,102 habitantes"));
        assert!(text.contains("🌎 Región: Eje Cafetero (ID: 2)"));
    }

    #[test]
    fn test_department_without_region_uses_placeholder() {
        let text = render_all_departments(&[department(1, "Amazonas", None)]);
        assert!(text.contains("🌎 Región: No especificada (ID: 2)"));
    }

    #[test]
    fn test_region_departments_header_uppercases_region() {
        let depts = vec![
            department(1, "Caldas", Some("Eje Cafetero")),
            department(2, "Quindío", Some("Eje Cafetero")),
        ];
        let text = render_region_departments(&depts);
        assert!(text.starts_with("🇨🇴 DEPARTAMENTOS DE LA REGIÓN EJE CAFETERO\nTotal de departamentos: 2"));
    }

    #[test]
    fn test_region_departments_header_unknown_region() {
        let text = render_region_departments(&[department(1, "Caldas", None)]);
        assert!(text.starts_with("🇨🇴 DEPARTAMENTOS DE LA REGIÓN DESCONOCIDA"));
    }

    #[test]
    fn test_country_rendering() {
        let country = CountryData {
            id: 1,
            name: "Colombia".to_string(),
            description: "País de América del Sur".to_string(),
            state_capital: "Bogotá".to_string(),
            surface: 1141748.0,
            population: 50882884.0,
            languages: vec!["Español".to_string(), "Inglés".to_string()],
            time_zone: "UTC-5".to_string(),
            currency: "Peso colombiano".to_string(),
            currency_code: "COP".to_string(),
            currency_symbol: "$".to_string(),
            iso_code: "CO".to_string(),
            internet_domain: ".co".to_string(),
            phone_prefix: "+57".to_string(),
            radio_prefix: "HJ".to_string(),
            aircraft_prefix: "HK".to_string(),
            sub_region: "South America".to_string(),
            region: "America".to_string(),
            borders: vec!["PAN".to_string(), "VEN".to_string()],
            flags: vec!["https://a/flag.svg".to_string(), "https://a/flag.png".to_string()],
        };

        let text = render_country(&country);
        let expected = "Country: Colombia\n\
                        Capital: Bogotá\n\
                        Population: 50,882,884\n\
                        Area: 1,141,748 km²\n\
                        Region: America - South America\n\
                        Languages: Español, Inglés\n\
                        Currency: Peso colombiano (COP $)\n\
                        Time Zone: UTC-5\n\
                        ISO Code: CO\n\
                        Internet Domain: .co\n\
                        Phone Prefix: +57\n\
                        Borders: PAN, VEN\n\
                        \n\
                        Description:\n\
                        País de América del Sur\n\
                        \n\
                        Flag URLs:\n\
                        https://a/flag.svg\n\
                        https://a/flag.png";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let depts = vec![department(1, "Caldas", Some("Eje Cafetero"))];
        assert_eq!(render_all_departments(&depts), render_all_departments(&depts));
    }
}
