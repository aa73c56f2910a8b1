//! Temperature bands and the lunch advice attached to each.
//!
//! Bands are half-open and cover the whole real line: the top band is open
//! upwards, the bottom band open downwards.

/// One fixed temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryBand {
    /// 28°C and above
    Heatwave,
    /// [23, 28)
    EarlySummer,
    /// [20, 23)
    Mild,
    /// [17, 20)
    Cool,
    /// [12, 17)
    Crisp,
    /// [9, 12)
    Chilly,
    /// [5, 9)
    Cold,
    /// below 5°C
    ColdSnap,
}

impl AdvisoryBand {
    /// Band containing the given temperature.
    ///
    /// Non-finite input lands in `ColdSnap` (every comparison against NaN fails).
    pub fn for_temperature(celsius: f64) -> Self {
        if celsius >= 28.0 {
            Self::Heatwave
        } else if celsius >= 23.0 {
            Self::EarlySummer
        } else if celsius >= 20.0 {
            Self::Mild
        } else if celsius >= 17.0 {
            Self::Cool
        } else if celsius >= 12.0 {
            Self::Crisp
        } else if celsius >= 9.0 {
            Self::Chilly
        } else if celsius >= 5.0 {
            Self::Cold
        } else {
            Self::ColdSnap
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Heatwave => "무더위예요! 시원한 냉면이나 콩국수 어때요?",
            Self::EarlySummer => "초여름 날씨예요. 가볍게 비빔밥이나 샐러드 어때요?",
            Self::Mild => "걷기 좋은 날씨예요. 조금 먼 맛집까지 다녀와도 좋아요.",
            Self::Cool => "살짝 선선해요. 따뜻한 칼국수 한 그릇 어때요?",
            Self::Crisp => "겉옷이 필요한 날씨예요. 찌개나 덮밥 어때요?",
            Self::Chilly => "꽤 쌀쌀해요. 뜨끈한 국밥이 생각나는 날이에요.",
            Self::Cold => "추워요. 가까운 곳에서 따뜻한 탕이나 전골 어때요?",
            Self::ColdSnap => "한파예요! 멀리 가지 말고 가까운 곳에서 뜨끈한 국물 요리 드세요.",
        }
    }
}

/// Advisory message for a temperature in °C.
pub fn advise_for(celsius: f64) -> &'static str {
    AdvisoryBand::for_temperature(celsius).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(AdvisoryBand::for_temperature(28.0), AdvisoryBand::Heatwave);
        assert_eq!(AdvisoryBand::for_temperature(27.9), AdvisoryBand::EarlySummer);
        assert_eq!(AdvisoryBand::for_temperature(23.0), AdvisoryBand::EarlySummer);
        assert_eq!(AdvisoryBand::for_temperature(22.9), AdvisoryBand::Mild);
        assert_eq!(AdvisoryBand::for_temperature(20.0), AdvisoryBand::Mild);
        assert_eq!(AdvisoryBand::for_temperature(19.9), AdvisoryBand::Cool);
        assert_eq!(AdvisoryBand::for_temperature(17.0), AdvisoryBand::Cool);
        assert_eq!(AdvisoryBand::for_temperature(16.9), AdvisoryBand::Crisp);
        assert_eq!(AdvisoryBand::for_temperature(12.0), AdvisoryBand::Crisp);
        assert_eq!(AdvisoryBand::for_temperature(11.9), AdvisoryBand::Chilly);
        assert_eq!(AdvisoryBand::for_temperature(9.0), AdvisoryBand::Chilly);
        assert_eq!(AdvisoryBand::for_temperature(8.9), AdvisoryBand::Cold);
        assert_eq!(AdvisoryBand::for_temperature(5.0), AdvisoryBand::Cold);
        assert_eq!(AdvisoryBand::for_temperature(4.9), AdvisoryBand::ColdSnap);
    }

    #[test]
    fn test_messages_for_named_temperatures() {
        assert!(advise_for(28.0).contains("무더위"));
        assert!(advise_for(27.9).contains("초여름"));
        assert!(advise_for(4.0).contains("한파"));
        assert_eq!(advise_for(-5.0), advise_for(4.0));
    }

    #[test]
    fn test_open_ended_bands() {
        assert_eq!(AdvisoryBand::for_temperature(45.0), AdvisoryBand::Heatwave);
        assert_eq!(AdvisoryBand::for_temperature(-40.0), AdvisoryBand::ColdSnap);
        assert_eq!(AdvisoryBand::for_temperature(f64::NAN), AdvisoryBand::ColdSnap);
        assert_eq!(
            AdvisoryBand::for_temperature(f64::INFINITY),
            AdvisoryBand::Heatwave
        );
    }

    #[test]
    fn test_bands_never_go_back_up_as_temperature_drops() {
        // Sweep downwards in 0.1° steps; the band index must be non-decreasing.
        let order = |b: AdvisoryBand| b as u8;
        let mut previous = order(AdvisoryBand::for_temperature(40.0));
        for step in 0..=500 {
            let t = 40.0 - f64::from(step) * 0.1;
            let current = order(AdvisoryBand::for_temperature(t));
            assert!(current >= previous, "band went back up at {t}");
            previous = current;
        }
    }
}
