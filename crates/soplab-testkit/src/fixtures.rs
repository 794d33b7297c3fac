//! Fixture catalog for integration tests
//!
//! Writes a minimal but complete project tree (config, data, templates)
//! under a caller-supplied root, so tests never depend on repository
//! data files.

use std::fs;
use std::io;
use std::path::Path;

/// Write a fixture project under `root`:
///
/// ```text
/// soplab.toml
/// data/departments.json
/// data/chemistry/index.json
/// data/chemistry/ph-meter.json
/// data/mechanical/index.json
/// data/mechanical/hot-air-oven.json
/// templates/standard.html
/// templates/compact.html
/// ```
pub fn write_catalog(root: &Path) -> io::Result<()> {
    fs::write(root.join("soplab.toml"), SOPLAB_TOML)?;

    let data = root.join("data");
    fs::create_dir_all(data.join("chemistry"))?;
    fs::create_dir_all(data.join("mechanical"))?;

    fs::write(data.join("departments.json"), DEPARTMENTS_JSON)?;
    fs::write(data.join("chemistry/index.json"), CHEMISTRY_INDEX_JSON)?;
    fs::write(data.join("chemistry/ph-meter.json"), PH_METER_JSON)?;
    fs::write(data.join("mechanical/index.json"), MECHANICAL_INDEX_JSON)?;
    fs::write(data.join("mechanical/hot-air-oven.json"), HOT_AIR_OVEN_JSON)?;

    let templates = root.join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(templates.join("standard.html"), STANDARD_TEMPLATE)?;
    fs::write(templates.join("compact.html"), COMPACT_TEMPLATE)?;

    Ok(())
}

const SOPLAB_TOML: &str = r#"[paths]
data_dir = "data"
templates_dir = "templates"
"#;

const DEPARTMENTS_JSON: &str = r#"{
  "departments": [
    { "key": "chemistry", "name": "Chemistry" },
    { "key": "mechanical", "name": "Mechanical Engineering" }
  ]
}
"#;

const CHEMISTRY_INDEX_JSON: &str = r#"{
  "instruments": [
    { "key": "ph-meter", "name": "pH Meter" }
  ]
}
"#;

const MECHANICAL_INDEX_JSON: &str = r#"{
  "instruments": [
    { "key": "hot-air-oven", "name": "Hot Air Oven" }
  ]
}
"#;

const PH_METER_JSON: &str = r#"{
  "meta": { "title": "pH Meter Operation & Calibration" },
  "sections": {
    "purpose": "To define the procedure for operation and calibration of the pH meter.",
    "scope": "Applicable to all pH measurements carried out in the chemistry laboratory.",
    "procedure": [
      "Switch on the instrument and allow it to warm up for 10 minutes.",
      "Rinse the electrode with distilled water.",
      "Calibrate using pH 4.0 and pH 7.0 buffer solutions.",
      "Record readings in the instrument log book."
    ],
    "precautions": "Never allow the electrode bulb to dry out."
  }
}
"#;

const HOT_AIR_OVEN_JSON: &str = r#"{
  "meta": { "title": "Hot Air Oven Operation" },
  "sections": {
    "purpose": "To define the procedure for safe operation of the hot air oven.",
    "scope": "Applicable to drying and sterilization activities in the thermal laboratory.",
    "procedure": [
      "Load samples on the perforated trays.",
      "Set the temperature below 180 degrees C.",
      "Start the timer and monitor the first cycle."
    ],
    "precautions": "Use heat-resistant gloves while unloading."
  }
}
"#;

const STANDARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>{{title}}</title></head>
<body>
<header>
  <h1>{{institute}}</h1>
  <h2>{{title}}</h2>
  {{#if sopNumber}}<p>SOP No: {{sopNumber}}</p>{{/if}}
  {{#if effectiveDate}}<p>Effective: {{effectiveDate}}</p>{{/if}}
  {{#if copyType}}<p class="stamp">{{copyType}}</p>{{/if}}
</header>
<section><h3>1. Purpose</h3><p>{{purpose}}</p></section>
<section><h3>2. Scope</h3><p>{{scope}}</p></section>
<section><h3>3. Responsibility</h3><p>{{responsibility}}</p></section>
<section><h3>4. Procedure</h3><ol>{{procedure}}</ol></section>
<section><h3>5. Precautions</h3><p>{{precautions}}</p></section>
{{#if applicability}}<section><h3>Applicability</h3><p>{{applicability}}</p></section>{{/if}}
{{#if abbreviations}}<section><h3>Abbreviations</h3><p>{{abbreviations}}</p></section>{{/if}}
{{#if references}}<section><h3>References</h3><p>{{references}}</p></section>{{/if}}
{{#if annexures}}<section><h3>Annexures</h3><p>{{annexures}}</p></section>{{/if}}
{{#if changeHistoryRows}}
<section>
  <h3>Change History</h3>
  <table><tr><th>Rev</th><th>Date</th><th>Details</th></tr>{{changeHistoryRows}}</table>
</section>
{{/if}}
<footer>
  <table>
    <tr><td>Prepared by: {{preparedBy}} {{preparedDesig}} {{preparedDate}}</td></tr>
    <tr><td>Checked by: {{checkedBy}} {{checkedDesig}} {{checkedDate}}</td></tr>
    <tr><td>Approved by: {{approvedBy}} {{approvedDesig}} {{approvedDate}}</td></tr>
  </table>
</footer>
</body>
</html>
"#;

const COMPACT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>{{title}}</title></head>
<body>
<h1>{{title}} ({{department}})</h1>
{{#if sopNumber}}<p>{{sopNumber}} rev {{revisionNo}}</p>{{/if}}
<p>{{purpose}}</p>
<ol>{{procedure}}</ol>
<p>{{precautions}}</p>
</body>
</html>
"#;
