use crate::imaging::error::ImageError;
use crate::imaging::prompt::{outfit_prompt, placeholder_url};
use crate::imaging::wire::{
    GenerateContentRequest, GenerateContentResponse, PredictParameters, PredictRequest,
    PredictResponse, PromptInstance,
};
use crate::types::outfit::OutfitCandidate;
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_IMAGE_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
pub const IMAGEN_MODEL: &str = "imagen-4.0-generate-preview-06-06";
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Output aspect ratios supported by Imagen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Wide => "16:9",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a [`GeneratedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Gemini,
    Imagen,
    Placeholder,
}

/// A rendered outfit preview.
///
/// Model output is returned inline as a `data:` URL; placeholders are remote URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
    pub source: ImageSource,
}

impl GeneratedImage {
    fn inline(mime_type: &str, base64_data: &str, source: ImageSource) -> Self {
        Self {
            url: format!("data:{mime_type};base64,{base64_data}"),
            source,
        }
    }

    fn placeholder(outfit: &OutfitCandidate) -> Self {
        Self {
            url: placeholder_url(&outfit.description),
            source: ImageSource::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == ImageSource::Placeholder
    }
}

/// Renders outfit previews with Google's image models.
///
/// Rendering never fails: without an API key, or when a model errors or
/// returns no image, a stock-photo placeholder is used instead and the
/// failure is logged.
///
/// # Examples
///
/// ```no_run
/// # use weather_wardrobe::{AspectRatio, ImageGenerator, OutfitCandidate};
/// # async fn run(outfit: OutfitCandidate) {
/// let generator = ImageGenerator::builder()
///     .api_key(std::env::var("GEMINI_API_KEY").unwrap_or_default())
///     .build();
///
/// let image = generator.generate_with_imagen(&outfit, AspectRatio::Portrait).await;
/// println!("{:?}: {}", image.source, &image.url[..40.min(image.url.len())]);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    request_delay: Duration,
}

#[bon]
impl ImageGenerator {
    /// * `.api_key(String)`: Optional. Without it (or with an empty key) only placeholders are produced.
    /// * `.base_url(String)`: Optional. API root, defaults to the public Generative Language endpoint.
    /// * `.request_delay(Duration)`: Optional. Pause between requests in [`ImageGenerator::generate_many`], defaults to 1 second.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: Option<String>,
        #[builder(into)] base_url: Option<String>,
        request_delay: Option<Duration>,
    ) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("No image API key configured, outfit previews will use placeholder images");
        }
        Self {
            http: Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_IMAGE_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_delay: request_delay.unwrap_or(DEFAULT_REQUEST_DELAY),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Renders an outfit with the Gemini image model, falling back to a placeholder.
    pub async fn generate(&self, outfit: &OutfitCandidate) -> GeneratedImage {
        let prompt = outfit_prompt(outfit, true);
        debug!("Gemini prompt for '{}': {}", outfit.outfit_name, prompt);
        match self.try_gemini(&prompt).await {
            Ok(image) => {
                info!("Generated Gemini image for outfit '{}'", outfit.outfit_name);
                image
            }
            Err(ImageError::MissingApiKey) => GeneratedImage::placeholder(outfit),
            Err(e) => {
                warn!(
                    "Gemini image generation failed for '{}', using placeholder: {}",
                    outfit.outfit_name, e
                );
                GeneratedImage::placeholder(outfit)
            }
        }
    }

    /// Renders an outfit with Imagen at the given aspect ratio. On any failure
    /// this falls back to [`ImageGenerator::generate`].
    pub async fn generate_with_imagen(
        &self,
        outfit: &OutfitCandidate,
        aspect_ratio: AspectRatio,
    ) -> GeneratedImage {
        let prompt = outfit_prompt(outfit, false);
        match self.try_imagen(&prompt, aspect_ratio).await {
            Ok(image) => {
                info!(
                    "Generated Imagen image with aspect ratio {} for outfit '{}'",
                    aspect_ratio, outfit.outfit_name
                );
                image
            }
            Err(ImageError::MissingApiKey) => GeneratedImage::placeholder(outfit),
            Err(e) => {
                warn!(
                    "Imagen generation failed for '{}', trying Gemini: {}",
                    outfit.outfit_name, e
                );
                self.generate(outfit).await
            }
        }
    }

    /// Renders every outfit in order, Imagen first, pausing between requests
    /// to stay under provider rate limits. Returns one image per outfit.
    pub async fn generate_many(&self, outfits: &[OutfitCandidate]) -> Vec<GeneratedImage> {
        let mut images = Vec::with_capacity(outfits.len());
        for (i, outfit) in outfits.iter().enumerate() {
            if i > 0 && self.has_api_key() && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
            images.push(
                self.generate_with_imagen(outfit, AspectRatio::default())
                    .await,
            );
        }
        info!("Generated {} outfit images", images.len());
        images
    }

    /// Single Gemini attempt without fallback.
    pub async fn try_gemini(&self, prompt: &str) -> Result<GeneratedImage, ImageError> {
        let response: GenerateContentResponse = self
            .post(
                GEMINI_IMAGE_MODEL,
                "generateContent",
                &GenerateContentRequest::text_and_image(prompt),
            )
            .await?;
        for text in response.texts() {
            debug!("Gemini text part: {}", text);
        }
        response
            .first_image()
            .map(|img| GeneratedImage::inline(&img.mime_type, &img.data, ImageSource::Gemini))
            .ok_or_else(|| ImageError::NoImage {
                model: GEMINI_IMAGE_MODEL.to_string(),
            })
    }

    /// Single Imagen attempt without fallback.
    pub async fn try_imagen(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, ImageError> {
        let request = PredictRequest {
            instances: vec![PromptInstance { prompt }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.as_str(),
                person_generation: "allow_adult",
            },
        };
        let response: PredictResponse = self.post(IMAGEN_MODEL, "predict", &request).await?;
        response
            .predictions
            .iter()
            .find_map(|p| {
                let data = p.bytes_base64_encoded.as_deref()?;
                let mime = p.mime_type.as_deref().unwrap_or("image/png");
                Some(GeneratedImage::inline(mime, data, ImageSource::Imagen))
            })
            .ok_or_else(|| ImageError::NoImage {
                model: IMAGEN_MODEL.to_string(),
            })
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        model: &str,
        method: &str,
        body: &B,
    ) -> Result<R, ImageError> {
        let api_key = self.api_key.as_deref().ok_or(ImageError::MissingApiKey)?;
        let url = format!("{}/models/{}:{}", self.base_url, model, method);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ImageError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e.status());
                return Err(if let Some(status) = e.status() {
                    ImageError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ImageError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ImageError::NetworkRequest(url.clone(), e))?;
        serde_json::from_slice(&body).map_err(|source| ImageError::JsonParse { url, source })
    }
}
