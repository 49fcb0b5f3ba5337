use quick_xml::{
    Error as XmlError, Reader,
    escape::{EscapeError, resolve_predefined_entity},
    events::Event,
};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{collage::to_base64, config::Config, error::UploadError, types::UploadResult};

/// Uploads a PNG to Imgur and returns its shareable link.
///
/// # Arguments
///
/// * `config` - Client id and upload endpoint
/// * `png` - Encoded collage
///
/// # Errors
///
/// - [`UploadError::Http`] on transport failures and non-success statuses
/// - [`UploadError::Xml`] if the response is not well-formed XML
/// - [`UploadError::MissingLink`] if the response has no `<link>` element
///
/// # Example
///
/// ```
/// let result = upload_image(&config, &png).await?;
/// println!("{}", result.link);
/// ```
pub async fn upload_image(config: &Config, png: &[u8]) -> Result<UploadResult, UploadError> {
    let payload = to_base64(png);

    tracing::debug!(
        url = %config.imgur_upload_url,
        bytes = png.len(),
        "uploading collage"
    );

    let client = Client::new();
    let response = client
        .post(&config.imgur_upload_url)
        .header(AUTHORIZATION, format!("Client-ID {}", config.imgur_client_id))
        .form(&[("image", payload.as_str()), ("type", "file")])
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    let link = parse_link(&body)?;

    Ok(UploadResult { link })
}

/// Extracts the text of the first non-empty `<link>` element of `xml`.
pub fn parse_link(xml: &str) -> Result<String, UploadError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_link = false;
    let mut link = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"link" => {
                in_link = true;
                link.clear();
            }
            Event::Text(e) if in_link => {
                let text = e.decode().map_err(XmlError::Encoding)?;
                link.push_str(&text);
            }
            Event::GeneralRef(e) if in_link => {
                if let Some(ch) = e.resolve_char_ref()? {
                    link.push(ch);
                } else {
                    let name = e.decode().map_err(XmlError::Encoding)?;
                    let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                        XmlError::from(EscapeError::UnrecognizedEntity(
                            0..name.len(),
                            name.to_string(),
                        ))
                    })?;
                    link.push_str(resolved);
                }
            }
            Event::CData(e) if in_link => {
                link.push_str(&String::from_utf8_lossy(&e));
            }
            Event::End(e) if e.name().as_ref() == b"link" => {
                let found = link.trim();
                if !found.is_empty() {
                    return Ok(found.to_string());
                }
                in_link = false;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Err(UploadError::MissingLink)
}
