use crate::model::Difficulty;

/// `(id, name, region, difficulty)` rows of the built-in catalog.
pub(super) const BUILTIN_COUNTRIES: &[(&str, &str, &str, Difficulty)] = &[
    ("us", "United States", "North America", Difficulty::Easy),
    ("ca", "Canada", "North America", Difficulty::Easy),
    ("mx", "Mexico", "North America", Difficulty::Easy),
    ("gb", "United Kingdom", "Europe", Difficulty::Easy),
    ("fr", "France", "Europe", Difficulty::Easy),
    ("de", "Germany", "Europe", Difficulty::Easy),
    ("it", "Italy", "Europe", Difficulty::Easy),
    ("es", "Spain", "Europe", Difficulty::Easy),
    ("ru", "Russia", "Europe", Difficulty::Easy),
    ("nl", "Netherlands", "Europe", Difficulty::Easy),
    ("cn", "China, People's Republic of", "Asia", Difficulty::Easy),
    ("jp", "Japan", "Asia", Difficulty::Easy),
    ("in", "India", "Asia", Difficulty::Easy),
    ("kr", "South Korea", "Asia", Difficulty::Easy),
    ("au", "Australia", "Oceania", Difficulty::Easy),
    ("br", "Brazil", "South America", Difficulty::Easy),
    ("ar", "Argentina", "South America", Difficulty::Easy),
    ("za", "South Africa", "Africa", Difficulty::Easy),
    ("eg", "Egypt", "Africa", Difficulty::Easy),
    ("se", "Sweden", "Europe", Difficulty::Medium),
    ("no", "Norway", "Europe", Difficulty::Medium),
    ("dk", "Denmark", "Europe", Difficulty::Medium),
    ("fi", "Finland", "Europe", Difficulty::Medium),
    ("be", "Belgium", "Europe", Difficulty::Medium),
    ("ch", "Switzerland", "Europe", Difficulty::Medium),
    ("at", "Austria", "Europe", Difficulty::Medium),
    ("pt", "Portugal", "Europe", Difficulty::Medium),
    ("gr", "Greece", "Europe", Difficulty::Medium),
    ("pl", "Poland", "Europe", Difficulty::Medium),
    ("cz", "Czech Republic", "Europe", Difficulty::Medium),
    ("hu", "Hungary", "Europe", Difficulty::Medium),
    ("ie", "Ireland", "Europe", Difficulty::Medium),
    ("th", "Thailand", "Asia", Difficulty::Medium),
    ("vn", "Vietnam", "Asia", Difficulty::Medium),
    ("my", "Malaysia", "Asia", Difficulty::Medium),
    ("sg", "Singapore", "Asia", Difficulty::Medium),
    ("ph", "Philippines", "Asia", Difficulty::Medium),
    ("id", "Indonesia", "Asia", Difficulty::Medium),
    ("pk", "Pakistan", "Asia", Difficulty::Medium),
    ("bd", "Bangladesh", "Asia", Difficulty::Medium),
    ("ir", "Iran", "Asia", Difficulty::Medium),
    ("iq", "Iraq", "Asia", Difficulty::Medium),
    ("il", "Israel", "Asia", Difficulty::Medium),
    ("tr", "Turkey", "Asia", Difficulty::Medium),
    ("sa", "Saudi Arabia", "Asia", Difficulty::Medium),
    ("ng", "Nigeria", "Africa", Difficulty::Medium),
    ("ke", "Kenya", "Africa", Difficulty::Medium),
    ("ma", "Morocco", "Africa", Difficulty::Medium),
    ("gh", "Ghana", "Africa", Difficulty::Medium),
    ("et", "Ethiopia", "Africa", Difficulty::Medium),
    ("tz", "Tanzania", "Africa", Difficulty::Medium),
    ("ug", "Uganda", "Africa", Difficulty::Medium),
    ("dz", "Algeria", "Africa", Difficulty::Medium),
    ("tn", "Tunisia", "Africa", Difficulty::Medium),
    ("ly", "Libya", "Africa", Difficulty::Medium),
    ("cl", "Chile", "South America", Difficulty::Medium),
    ("pe", "Peru", "South America", Difficulty::Medium),
    ("co", "Colombia", "South America", Difficulty::Medium),
    ("ve", "Venezuela", "South America", Difficulty::Medium),
    ("ec", "Ecuador", "South America", Difficulty::Medium),
    ("cr", "Costa Rica", "Central America", Difficulty::Medium),
    ("pa", "Panama", "Central America", Difficulty::Medium),
    ("gt", "Guatemala", "Central America", Difficulty::Medium),
    ("cu", "Cuba", "Caribbean", Difficulty::Medium),
    ("jm", "Jamaica", "Caribbean", Difficulty::Medium),
    ("nz", "New Zealand", "Oceania", Difficulty::Medium),
    ("fj", "Fiji", "Oceania", Difficulty::Medium),
    ("pg", "Papua New Guinea", "Oceania", Difficulty::Medium),
    ("is", "Iceland", "Europe", Difficulty::Hard),
    ("mt", "Malta", "Europe", Difficulty::Hard),
    ("cy", "Cyprus", "Europe", Difficulty::Hard),
    ("lu", "Luxembourg", "Europe", Difficulty::Hard),
    ("ee", "Estonia", "Europe", Difficulty::Hard),
    ("lv", "Latvia", "Europe", Difficulty::Hard),
    ("lt", "Lithuania", "Europe", Difficulty::Hard),
    ("si", "Slovenia", "Europe", Difficulty::Hard),
    ("sk", "Slovakia", "Europe", Difficulty::Hard),
    ("hr", "Croatia", "Europe", Difficulty::Hard),
    ("bg", "Bulgaria", "Europe", Difficulty::Hard),
    ("ro", "Romania", "Europe", Difficulty::Hard),
    ("rs", "Serbia", "Europe", Difficulty::Hard),
    ("ba", "Bosnia and Herzegovina", "Europe", Difficulty::Hard),
    ("me", "Montenegro", "Europe", Difficulty::Hard),
    ("mk", "North Macedonia", "Europe", Difficulty::Hard),
    ("al", "Albania", "Europe", Difficulty::Hard),
    ("by", "Belarus", "Europe", Difficulty::Hard),
    ("ua", "Ukraine", "Europe", Difficulty::Hard),
    ("md", "Moldova", "Europe", Difficulty::Hard),
    ("mc", "Monaco", "Europe", Difficulty::Hard),
    ("ad", "Andorra", "Europe", Difficulty::Hard),
    ("sm", "San Marino", "Europe", Difficulty::Hard),
    ("va", "Vatican City", "Europe", Difficulty::Hard),
    ("li", "Liechtenstein", "Europe", Difficulty::Hard),
    ("af", "Afghanistan", "Asia", Difficulty::Hard),
    ("kz", "Kazakhstan", "Asia", Difficulty::Hard),
    ("uz", "Uzbekistan", "Asia", Difficulty::Hard),
    ("kg", "Kyrgyzstan", "Asia", Difficulty::Hard),
    ("tj", "Tajikistan", "Asia", Difficulty::Hard),
    ("tm", "Turkmenistan", "Asia", Difficulty::Hard),
    ("mn", "Mongolia", "Asia", Difficulty::Hard),
    ("kp", "North Korea", "Asia", Difficulty::Hard),
    ("mm", "Myanmar", "Asia", Difficulty::Hard),
    ("la", "Laos", "Asia", Difficulty::Hard),
    ("kh", "Cambodia", "Asia", Difficulty::Hard),
    ("np", "Nepal", "Asia", Difficulty::Hard),
    ("bt", "Bhutan", "Asia", Difficulty::Hard),
    ("lk", "Sri Lanka", "Asia", Difficulty::Hard),
    ("mv", "Maldives", "Asia", Difficulty::Hard),
    ("bn", "Brunei", "Asia", Difficulty::Hard),
    ("tl", "East Timor", "Asia", Difficulty::Hard),
    ("ge", "Georgia", "Asia", Difficulty::Hard),
    ("am", "Armenia", "Asia", Difficulty::Hard),
    ("az", "Azerbaijan", "Asia", Difficulty::Hard),
    ("ae", "United Arab Emirates", "Asia", Difficulty::Hard),
    ("qa", "Qatar", "Asia", Difficulty::Hard),
    ("kw", "Kuwait", "Asia", Difficulty::Hard),
    ("bh", "Bahrain", "Asia", Difficulty::Hard),
    ("om", "Oman", "Asia", Difficulty::Hard),
    ("ye", "Yemen", "Asia", Difficulty::Hard),
    ("jo", "Jordan", "Asia", Difficulty::Hard),
    ("lb", "Lebanon", "Asia", Difficulty::Hard),
    ("sy", "Syria", "Asia", Difficulty::Hard),
    ("tw", "Republic of China (Taiwan)", "Asia", Difficulty::Hard),
    ("hk", "Hong Kong, SAR of China", "Asia", Difficulty::Hard),
    ("mo", "Macao, SAR of China", "Asia", Difficulty::Hard),
    ("ao", "Angola", "Africa", Difficulty::Hard),
    ("bw", "Botswana", "Africa", Difficulty::Hard),
    ("bf", "Burkina Faso", "Africa", Difficulty::Hard),
    ("bi", "Burundi", "Africa", Difficulty::Hard),
    ("cm", "Cameroon", "Africa", Difficulty::Hard),
    ("cv", "Cape Verde", "Africa", Difficulty::Hard),
    ("cf", "Central African Republic", "Africa", Difficulty::Hard),
    ("td", "Chad", "Africa", Difficulty::Hard),
    ("km", "Comoros", "Africa", Difficulty::Hard),
    ("cg", "Republic of the Congo", "Africa", Difficulty::Hard),
    ("cd", "Democratic Republic of the Congo", "Africa", Difficulty::Hard),
    ("dj", "Djibouti", "Africa", Difficulty::Hard),
    ("gq", "Equatorial Guinea", "Africa", Difficulty::Hard),
    ("er", "Eritrea", "Africa", Difficulty::Hard),
    ("ga", "Gabon", "Africa", Difficulty::Hard),
    ("gm", "Gambia", "Africa", Difficulty::Hard),
    ("gn", "Guinea", "Africa", Difficulty::Hard),
    ("gw", "Guinea-Bissau", "Africa", Difficulty::Hard),
    ("ls", "Lesotho", "Africa", Difficulty::Hard),
    ("lr", "Liberia", "Africa", Difficulty::Hard),
    ("mg", "Madagascar", "Africa", Difficulty::Hard),
    ("mw", "Malawi", "Africa", Difficulty::Hard),
    ("ml", "Mali", "Africa", Difficulty::Hard),
    ("mr", "Mauritania", "Africa", Difficulty::Hard),
    ("mu", "Mauritius", "Africa", Difficulty::Hard),
    ("mz", "Mozambique", "Africa", Difficulty::Hard),
    ("na", "Namibia", "Africa", Difficulty::Hard),
    ("ne", "Niger", "Africa", Difficulty::Hard),
    ("rw", "Rwanda", "Africa", Difficulty::Hard),
    ("st", "São Tomé and Príncipe", "Africa", Difficulty::Hard),
    ("sn", "Senegal", "Africa", Difficulty::Hard),
    ("sc", "Seychelles", "Africa", Difficulty::Hard),
    ("sl", "Sierra Leone", "Africa", Difficulty::Hard),
    ("so", "Somalia", "Africa", Difficulty::Hard),
    ("ss", "South Sudan", "Africa", Difficulty::Hard),
    ("sd", "Sudan", "Africa", Difficulty::Hard),
    ("sz", "Eswatini", "Africa", Difficulty::Hard),
    ("tg", "Togo", "Africa", Difficulty::Hard),
    ("zm", "Zambia", "Africa", Difficulty::Hard),
    ("zw", "Zimbabwe", "Africa", Difficulty::Hard),
    ("ci", "Côte d'Ivoire", "Africa", Difficulty::Hard),
    ("bo", "Bolivia", "South America", Difficulty::Hard),
    ("py", "Paraguay", "South America", Difficulty::Hard),
    ("uy", "Uruguay", "South America", Difficulty::Hard),
    ("gy", "Guyana", "South America", Difficulty::Hard),
    ("sr", "Suriname", "South America", Difficulty::Hard),
    ("bz", "Belize", "Central America", Difficulty::Hard),
    ("sv", "El Salvador", "Central America", Difficulty::Hard),
    ("hn", "Honduras", "Central America", Difficulty::Hard),
    ("ni", "Nicaragua", "Central America", Difficulty::Hard),
    ("ag", "Antigua and Barbuda", "Caribbean", Difficulty::Hard),
    ("bs", "Bahamas", "Caribbean", Difficulty::Hard),
    ("bb", "Barbados", "Caribbean", Difficulty::Hard),
    ("dm", "Dominica", "Caribbean", Difficulty::Hard),
    ("do", "Dominican Republic", "Caribbean", Difficulty::Hard),
    ("gd", "Grenada", "Caribbean", Difficulty::Hard),
    ("ht", "Haiti", "Caribbean", Difficulty::Hard),
    ("kn", "Saint Kitts and Nevis", "Caribbean", Difficulty::Hard),
    ("lc", "Saint Lucia", "Caribbean", Difficulty::Hard),
    ("vc", "Saint Vincent and the Grenadines", "Caribbean", Difficulty::Hard),
    ("tt", "Trinidad and Tobago", "Caribbean", Difficulty::Hard),
    ("fm", "Federated States of Micronesia", "Oceania", Difficulty::Hard),
    ("ki", "Kiribati", "Oceania", Difficulty::Hard),
    ("mh", "Marshall Islands", "Oceania", Difficulty::Hard),
    ("nr", "Nauru", "Oceania", Difficulty::Hard),
    ("pw", "Palau", "Oceania", Difficulty::Hard),
    ("ws", "Samoa", "Oceania", Difficulty::Hard),
    ("sb", "Solomon Islands", "Oceania", Difficulty::Hard),
    ("to", "Tonga", "Oceania", Difficulty::Hard),
    ("tv", "Tuvalu", "Oceania", Difficulty::Hard),
    ("vu", "Vanuatu", "Oceania", Difficulty::Hard),
];
