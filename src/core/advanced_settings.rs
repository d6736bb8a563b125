//! `advancedsettings.xml` rendering
//!
//! The host reads this file with a fixed schema: element names, nesting,
//! and values matter, whitespace does not.

use super::settings::Settings;

/// Root element
pub const ROOT_ELEMENT: &str = "advancedsettings";

/// Render settings as an `advancedsettings.xml` document
pub fn render_advanced_settings(settings: &Settings) -> String {
    let cache: [(&str, u64); 3] = [
        ("buffermode", u64::from(settings.buffer_mode)),
        ("memorysize", settings.memory_size),
        ("readfactor", u64::from(settings.read_factor)),
    ];
    let network: [(&str, u64); 5] = [
        ("curlclienttimeout", u64::from(settings.curl_client_timeout)),
        ("curllowspeedtime", u64::from(settings.curl_low_speed_time)),
        ("nfschunksize", settings.nfs_chunk_size),
        ("smbchunksize", settings.smb_chunk_size),
        ("noofbuffers", u64::from(settings.no_of_buffers)),
    ];

    let mut xml = format!("<{ROOT_ELEMENT}>\n");
    xml.push_str(&render_section("cache", &cache));
    xml.push_str(&render_section("network", &network));
    xml.push_str(&format!("</{ROOT_ELEMENT}>\n"));
    xml
}

fn render_section(name: &str, fields: &[(&str, u64)]) -> String {
    let leaves: String = fields
        .iter()
        .map(|(field, value)| format!("        <{field}>{value}</{field}>\n"))
        .collect();
    format!("    <{name}>\n{leaves}    </{name}>\n")
}
