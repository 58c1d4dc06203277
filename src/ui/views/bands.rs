use roster::domain::value_objects::title_case;
use roster::BandMember;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const BAND_RULE: &str = "--------------------";

pub struct BandsView<'a> {
    genre: &'a str,
    bands: &'a [Vec<BandMember>],
}

impl<'a> BandsView<'a> {
    pub fn new(genre: &'a str, bands: &'a [Vec<BandMember>]) -> Self {
        Self { genre, bands }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Band.colored(supports_color, supports_unicode),
            ColoredText::info(format!(
                "{} possible {} band(s)",
                self.bands.len(),
                title_case(self.genre)
            ))
            .bold()
            .render(supports_color)
        );

        for (i, band) in self.bands.iter().enumerate() {
            out.push_str(&format!("\n{BAND_RULE} Band {} {BAND_RULE}\n", i + 1));
            for member in band {
                out.push_str(&format!(
                    "{}: {}, {}\n",
                    title_case(&member.instrument),
                    title_case(&member.musician.name),
                    member.musician.email.to_lowercase()
                ));
            }
        }
        out
    }
}
