//! Fixed disclaimer text shared across the pack.

pub const DISCLAIMER_TEXT: &str = "This document is a template and is provided for general informational and educational \
purposes only. It does not constitute, and is not a substitute for, professional legal \
advice. The information contained herein is not legal advice of any kind. The use or \
reliance of any information contained in this pack is solely at your own risk. We \
encourage you to consult with a qualified legal professional in your jurisdiction to \
ensure this agreement meets your specific business needs and complies with all local laws.";

pub const DISCLAIMER_EN: &str = "This document is a template only and not legal advice. Please consult with a qualified legal professional to ensure compliance with local laws.";

pub const DISCLAIMER_MS: &str = "Dokumen ini hanyalah templat dan bukan nasihat undang-undang. Sila berunding dengan profesional undang-undang yang berkelayakan untuk memastikan pematuhan undang-undang tempatan.";
