use image::DynamicImage;

// 解碼後的影像與偵測到的原始格式、色彩模式
pub struct OpenedImage {
    pub image: DynamicImage,
    pub format: String,
    pub mode: String,
}
