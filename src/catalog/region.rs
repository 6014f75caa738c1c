//! Delivery regions: the 47 prefectures, keyed by their form codes.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! regions {
    ($( $variant:ident => ($code:literal, $name:literal) ),+ $(,)?) => {
        /// An administrative region a vehicle can be delivered to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Region {
            $( $variant, )+
        }

        impl Region {
            pub const ALL: &'static [Region] = &[ $( Region::$variant, )+ ];

            pub fn code(self) -> &'static str {
                match self {
                    $( Region::$variant => $code, )+
                }
            }

            /// Japanese prefecture name.
            pub fn name(self) -> &'static str {
                match self {
                    $( Region::$variant => $name, )+
                }
            }
        }
    };
}

regions! {
    Hokkaido => ("hokkaido", "北海道"),
    Aomori => ("aomori", "青森県"),
    Iwate => ("iwate", "岩手県"),
    Miyagi => ("miyagi", "宮城県"),
    Akita => ("akita", "秋田県"),
    Yamagata => ("yamagata", "山形県"),
    Fukushima => ("fukushima", "福島県"),
    Ibaraki => ("ibaraki", "茨城県"),
    Tochigi => ("tochigi", "栃木県"),
    Gunma => ("gunma", "群馬県"),
    Saitama => ("saitama", "埼玉県"),
    Chiba => ("chiba", "千葉県"),
    Tokyo => ("tokyo", "東京都"),
    Kanagawa => ("kanagawa", "神奈川県"),
    Niigata => ("nigata", "新潟県"),
    Toyama => ("toyama", "富山県"),
    Ishikawa => ("ishikawa", "石川県"),
    Fukui => ("fukui", "福井県"),
    Yamanashi => ("yamanashi", "山梨県"),
    Nagano => ("nagano", "長野県"),
    Gifu => ("gifu", "岐阜県"),
    Shizuoka => ("shizuoka", "静岡県"),
    Aichi => ("aichi", "愛知県"),
    Mie => ("mie", "三重県"),
    Shiga => ("shiga", "滋賀県"),
    Kyoto => ("kyoto", "京都府"),
    Osaka => ("osaka", "大阪府"),
    Hyogo => ("hyogo", "兵庫県"),
    Nara => ("nara", "奈良県"),
    Wakayama => ("wakayama", "和歌山県"),
    Tottori => ("tottori", "鳥取県"),
    Shimane => ("shimane", "島根県"),
    Okayama => ("okayama", "岡山県"),
    Hiroshima => ("hiroshima", "広島県"),
    Yamaguchi => ("yamaguchi", "山口県"),
    Tokushima => ("tokushima", "徳島県"),
    Kagawa => ("kagawa", "香川県"),
    Ehime => ("ehime", "愛媛県"),
    Kochi => ("kochi", "高知県"),
    Fukuoka => ("fukuoka", "福岡県"),
    Saga => ("saga", "佐賀県"),
    Nagasaki => ("nagasaki", "長崎県"),
    Kumamoto => ("kumamoto", "熊本県"),
    Oita => ("oita", "大分県"),
    Miyazaki => ("miyazaki", "宮崎県"),
    Kagoshima => ("kagoshima", "鹿児島県"),
    Okinawa => ("okinawa", "沖縄県"),
}

impl Region {
    /// Case-sensitive lookup; codes are exactly what the form submits.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
