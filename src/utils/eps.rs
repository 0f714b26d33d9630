use std::io::Write;

use image::DynamicImage;

use crate::error::ConvertResult;

const HEX_LINE: usize = 78;

/// 以十六進位資料寫出 Level 2 EPS，灰階用 `image`，彩色用 `colorimage`
pub fn write_eps<W: Write>(image: &DynamicImage, writer: &mut W) -> ConvertResult<()> {
    let (samples, bands, operator) = if image.color().has_color() {
        (image.to_rgb8().into_raw(), 3, "false 3 colorimage")
    } else {
        (image.to_luma8().into_raw(), 1, "image")
    };
    let (width, height) = (image.width(), image.height());

    write!(
        writer,
        "%!PS-Adobe-3.0 EPSF-3.0\n\
         %%Creator: img_convert\n\
         %%BoundingBox: 0 0 {w} {h}\n\
         %%Pages: 1\n\
         %%EndComments\n\
         %%Page: 1 1\n\
         %%ImageData: {w} {h} 8 {bands} 0 1 1 \"{operator}\"\n\
         gsave\n\
         10 dict begin\n\
         /buf {row} string def\n\
         {w} {h} scale\n\
         {w} {h} 8\n\
         [{w} 0 0 -{h} 0 {h}]\n\
         {{ currentfile buf readhexstring pop }} bind\n\
         {operator}\n",
        w = width,
        h = height,
        bands = bands,
        row = width as usize * bands,
        operator = operator,
    )?;

    let mut line = String::with_capacity(HEX_LINE + 1);
    for byte in samples {
        line.push_str(&format!("{:02x}", byte));
        if line.len() >= HEX_LINE {
            line.push('\n');
            writer.write_all(line.as_bytes())?;
            line.clear();
        }
    }
    if !line.is_empty() {
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }

    writer.write_all(b"%%EndBinary\ngrestore end\n%%EOF\n")?;
    Ok(())
}
