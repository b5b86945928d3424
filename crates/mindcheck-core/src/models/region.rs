use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Region of residence chosen on the first questionnaire step.
///
/// The list is closed and ordered the way it is presented to the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Region {
    Seoul,
    Busan,
    Daegu,
    Incheon,
    Gwangju,
    Daejeon,
    Ulsan,
    Sejong,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Jeonbuk,
    Jeonnam,
    Gyeongbuk,
    Gyeongnam,
    Jeju,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Seoul,
        Region::Busan,
        Region::Daegu,
        Region::Incheon,
        Region::Gwangju,
        Region::Daejeon,
        Region::Ulsan,
        Region::Sejong,
        Region::Gyeonggi,
        Region::Gangwon,
        Region::Chungbuk,
        Region::Chungnam,
        Region::Jeonbuk,
        Region::Jeonnam,
        Region::Gyeongbuk,
        Region::Gyeongnam,
        Region::Jeju,
    ];

    /// Stable identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Region::Seoul => "seoul",
            Region::Busan => "busan",
            Region::Daegu => "daegu",
            Region::Incheon => "incheon",
            Region::Gwangju => "gwangju",
            Region::Daejeon => "daejeon",
            Region::Ulsan => "ulsan",
            Region::Sejong => "sejong",
            Region::Gyeonggi => "gyeonggi",
            Region::Gangwon => "gangwon",
            Region::Chungbuk => "chungbuk",
            Region::Chungnam => "chungnam",
            Region::Jeonbuk => "jeonbuk",
            Region::Jeonnam => "jeonnam",
            Region::Gyeongbuk => "gyeongbuk",
            Region::Gyeongnam => "gyeongnam",
            Region::Jeju => "jeju",
        }
    }

    /// Korean display name shown in the region picker and the summary.
    pub fn display_name(self) -> &'static str {
        match self {
            Region::Seoul => "서울특별시",
            Region::Busan => "부산광역시",
            Region::Daegu => "대구광역시",
            Region::Incheon => "인천광역시",
            Region::Gwangju => "광주광역시",
            Region::Daejeon => "대전광역시",
            Region::Ulsan => "울산광역시",
            Region::Sejong => "세종광역시",
            Region::Gyeonggi => "경기도",
            Region::Gangwon => "강원도",
            Region::Chungbuk => "충청북도",
            Region::Chungnam => "충청남도",
            Region::Jeonbuk => "전라북도",
            Region::Jeonnam => "전라남도",
            Region::Gyeongbuk => "경상북도",
            Region::Gyeongnam => "경상남도",
            Region::Jeju => "제주특별자치도",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    /// Accepts either the stable id (`"seoul"`) or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.id().eq_ignore_ascii_case(s) || r.display_name() == s)
            .ok_or_else(|| CoreError::UnknownRegion(s.to_string()))
    }
}
