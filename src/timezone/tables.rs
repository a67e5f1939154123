//! Static timezone tables.
//!
//! - [`COUNTRY_ZONES`]: countries whose candidates do not depend on the state
//! - [`STATE_ZONES`]: `(country, state)` entries, where a state of `*` is the
//!   catch-all for a country that has no more specific match
//! - [`ZONE_CATALOGUE`]: every zone offered to the user, with its city label,
//!   in display declaration order

pub(crate) const CATCH_ALL_STATE: &str = "*";

pub(crate) static COUNTRY_ZONES: &[(&str, &[&str])] = &[
    // Europe
    ("AD", &["Europe/Andorra"]),
    ("AL", &["Europe/Tirane"]),
    ("AT", &["Europe/Vienna"]),
    ("BA", &["Europe/Sarajevo"]),
    ("BE", &["Europe/Brussels"]),
    ("BG", &["Europe/Sofia"]),
    ("BY", &["Europe/Minsk"]),
    ("CH", &["Europe/Zurich"]),
    ("CY", &["Asia/Nicosia"]),
    ("CZ", &["Europe/Prague"]),
    ("DE", &["Europe/Berlin"]),
    ("DK", &["Europe/Copenhagen"]),
    ("EE", &["Europe/Tallinn"]),
    ("FI", &["Europe/Helsinki"]),
    ("FR", &["Europe/Paris"]),
    ("GB", &["Europe/London"]),
    ("GI", &["Europe/Gibraltar"]),
    ("GR", &["Europe/Athens"]),
    ("HR", &["Europe/Zagreb"]),
    ("HU", &["Europe/Budapest"]),
    ("IE", &["Europe/Dublin"]),
    ("IS", &["Atlantic/Reykjavik"]),
    ("IT", &["Europe/Rome"]),
    ("LI", &["Europe/Vaduz"]),
    ("LT", &["Europe/Vilnius"]),
    ("LU", &["Europe/Luxembourg"]),
    ("LV", &["Europe/Riga"]),
    ("MC", &["Europe/Monaco"]),
    ("MD", &["Europe/Chisinau"]),
    ("ME", &["Europe/Podgorica"]),
    ("MK", &["Europe/Skopje"]),
    ("MT", &["Europe/Malta"]),
    ("NL", &["Europe/Amsterdam"]),
    ("NO", &["Europe/Oslo"]),
    ("PL", &["Europe/Warsaw"]),
    ("RO", &["Europe/Bucharest"]),
    ("RS", &["Europe/Belgrade"]),
    ("SE", &["Europe/Stockholm"]),
    ("SI", &["Europe/Ljubljana"]),
    ("SK", &["Europe/Bratislava"]),
    ("SM", &["Europe/San_Marino"]),
    ("TR", &["Europe/Istanbul"]),
    ("UA", &["Europe/Kyiv", "Europe/Simferopol"]),
    ("VA", &["Europe/Vatican"]),
    // Middle East and Asia
    ("AE", &["Asia/Dubai"]),
    ("AF", &["Asia/Kabul"]),
    ("AM", &["Asia/Yerevan"]),
    ("AZ", &["Asia/Baku"]),
    ("BD", &["Asia/Dhaka"]),
    ("BH", &["Asia/Bahrain"]),
    ("BN", &["Asia/Brunei"]),
    ("BT", &["Asia/Thimphu"]),
    ("CN", &["Asia/Shanghai"]),
    ("GE", &["Asia/Tbilisi"]),
    ("HK", &["Asia/Hong_Kong"]),
    ("IL", &["Asia/Jerusalem"]),
    ("IN", &["Asia/Kolkata"]),
    ("IQ", &["Asia/Baghdad"]),
    ("IR", &["Asia/Tehran"]),
    ("JO", &["Asia/Amman"]),
    ("JP", &["Asia/Tokyo"]),
    ("KG", &["Asia/Bishkek"]),
    ("KH", &["Asia/Phnom_Penh"]),
    ("KP", &["Asia/Pyongyang"]),
    ("KR", &["Asia/Seoul"]),
    ("KW", &["Asia/Kuwait"]),
    ("LA", &["Asia/Vientiane"]),
    ("LB", &["Asia/Beirut"]),
    ("LK", &["Asia/Colombo"]),
    ("MM", &["Asia/Yangon"]),
    ("MO", &["Asia/Macau"]),
    ("MV", &["Indian/Maldives"]),
    ("NP", &["Asia/Kathmandu"]),
    ("OM", &["Asia/Muscat"]),
    ("PH", &["Asia/Manila"]),
    ("PK", &["Asia/Karachi"]),
    ("QA", &["Asia/Qatar"]),
    ("SA", &["Asia/Riyadh"]),
    ("SG", &["Asia/Singapore"]),
    ("SY", &["Asia/Damascus"]),
    ("TH", &["Asia/Bangkok"]),
    ("TJ", &["Asia/Dushanbe"]),
    ("TL", &["Asia/Dili"]),
    ("TM", &["Asia/Ashgabat"]),
    ("TW", &["Asia/Taipei"]),
    ("UZ", &["Asia/Tashkent", "Asia/Samarkand"]),
    ("VN", &["Asia/Ho_Chi_Minh"]),
    ("YE", &["Asia/Aden"]),
    // Africa
    ("AO", &["Africa/Luanda"]),
    ("BI", &["Africa/Bujumbura"]),
    ("BW", &["Africa/Gaborone"]),
    ("CG", &["Africa/Brazzaville"]),
    ("CI", &["Africa/Abidjan"]),
    ("CM", &["Africa/Douala"]),
    ("DJ", &["Africa/Djibouti"]),
    ("DZ", &["Africa/Algiers"]),
    ("EG", &["Africa/Cairo"]),
    ("ER", &["Africa/Asmara"]),
    ("ET", &["Africa/Addis_Ababa"]),
    ("GA", &["Africa/Libreville"]),
    ("GH", &["Africa/Accra"]),
    ("KE", &["Africa/Nairobi"]),
    ("LS", &["Africa/Maseru"]),
    ("LY", &["Africa/Tripoli"]),
    ("MA", &["Africa/Casablanca"]),
    ("MG", &["Indian/Antananarivo"]),
    ("ML", &["Africa/Bamako"]),
    ("MU", &["Indian/Mauritius"]),
    ("MW", &["Africa/Blantyre"]),
    ("MZ", &["Africa/Maputo"]),
    ("NA", &["Africa/Windhoek"]),
    ("NE", &["Africa/Niamey"]),
    ("NG", &["Africa/Lagos"]),
    ("RW", &["Africa/Kigali"]),
    ("SD", &["Africa/Khartoum"]),
    ("SN", &["Africa/Dakar"]),
    ("SO", &["Africa/Mogadishu"]),
    ("SS", &["Africa/Juba"]),
    ("SZ", &["Africa/Mbabane"]),
    ("TD", &["Africa/Ndjamena"]),
    ("TN", &["Africa/Tunis"]),
    ("TZ", &["Africa/Dar_es_Salaam"]),
    ("UG", &["Africa/Kampala"]),
    ("ZA", &["Africa/Johannesburg"]),
    ("ZM", &["Africa/Lusaka"]),
    ("ZW", &["Africa/Harare"]),
    // Americas
    ("AR", &["America/Argentina/Buenos_Aires"]),
    ("BB", &["America/Barbados"]),
    ("BO", &["America/La_Paz"]),
    ("BS", &["America/Nassau"]),
    ("BZ", &["America/Belize"]),
    ("CO", &["America/Bogota"]),
    ("CR", &["America/Costa_Rica"]),
    ("CU", &["America/Havana"]),
    ("DO", &["America/Santo_Domingo"]),
    ("GT", &["America/Guatemala"]),
    ("GY", &["America/Guyana"]),
    ("HN", &["America/Tegucigalpa"]),
    ("HT", &["America/Port-au-Prince"]),
    ("JM", &["America/Jamaica"]),
    ("NI", &["America/Managua"]),
    ("PA", &["America/Panama"]),
    ("PE", &["America/Lima"]),
    ("PR", &["America/Puerto_Rico"]),
    ("PY", &["America/Asuncion"]),
    ("SR", &["America/Paramaribo"]),
    ("SV", &["America/El_Salvador"]),
    ("TT", &["America/Port_of_Spain"]),
    ("UY", &["America/Montevideo"]),
    ("VE", &["America/Caracas"]),
    // Oceania
    ("FJ", &["Pacific/Fiji"]),
    ("NC", &["Pacific/Noumea"]),
    ("PG", &["Pacific/Port_Moresby"]),
    ("SB", &["Pacific/Guadalcanal"]),
    ("TO", &["Pacific/Tongatapu"]),
    ("VU", &["Pacific/Efate"]),
    ("WS", &["Pacific/Apia"]),
];

pub(crate) static STATE_ZONES: &[(&str, &str, &[&str])] = &[
    // United States. Texas is split by longitude before this table is consulted.
    ("US", "Alabama", &["US/Central"]),
    ("US", "Alaska", &["US/Alaska", "US/Aleutian"]),
    ("US", "Arizona", &["US/Arizona"]),
    ("US", "Arkansas", &["US/Central"]),
    ("US", "California", &["US/Pacific"]),
    ("US", "Colorado", &["US/Mountain"]),
    ("US", "Connecticut", &["US/Eastern"]),
    ("US", "Delaware", &["US/Eastern"]),
    ("US", "District of Columbia", &["US/Eastern"]),
    ("US", "Florida", &["US/Eastern", "US/Central"]),
    ("US", "Georgia", &["US/Eastern"]),
    ("US", "Hawaii", &["US/Hawaii"]),
    ("US", "Idaho", &["US/Mountain", "US/Pacific"]),
    ("US", "Illinois", &["US/Central"]),
    ("US", "Indiana", &["US/Eastern", "US/Central"]),
    ("US", "Iowa", &["US/Central"]),
    ("US", "Kansas", &["US/Central", "US/Mountain"]),
    ("US", "Kentucky", &["US/Eastern", "US/Central"]),
    ("US", "Louisiana", &["US/Central"]),
    ("US", "Maine", &["US/Eastern"]),
    ("US", "Maryland", &["US/Eastern"]),
    ("US", "Massachusetts", &["US/Eastern"]),
    ("US", "Michigan", &["US/Eastern", "US/Central"]),
    ("US", "Minnesota", &["US/Central"]),
    ("US", "Mississippi", &["US/Central"]),
    ("US", "Missouri", &["US/Central"]),
    ("US", "Montana", &["US/Mountain"]),
    ("US", "Nebraska", &["US/Central", "US/Mountain"]),
    ("US", "Nevada", &["US/Pacific"]),
    ("US", "New Hampshire", &["US/Eastern"]),
    ("US", "New Jersey", &["US/Eastern"]),
    ("US", "New Mexico", &["US/Mountain"]),
    ("US", "New York", &["US/Eastern"]),
    ("US", "North Carolina", &["US/Eastern"]),
    ("US", "North Dakota", &["US/Central", "US/Mountain"]),
    ("US", "Ohio", &["US/Eastern"]),
    ("US", "Oklahoma", &["US/Central"]),
    ("US", "Oregon", &["US/Pacific", "US/Mountain"]),
    ("US", "Pennsylvania", &["US/Eastern"]),
    ("US", "Rhode Island", &["US/Eastern"]),
    ("US", "South Carolina", &["US/Eastern"]),
    ("US", "South Dakota", &["US/Central", "US/Mountain"]),
    ("US", "Tennessee", &["US/Central", "US/Eastern"]),
    ("US", "Utah", &["US/Mountain"]),
    ("US", "Vermont", &["US/Eastern"]),
    ("US", "Virginia", &["US/Eastern"]),
    ("US", "Washington", &["US/Pacific"]),
    ("US", "West Virginia", &["US/Eastern"]),
    ("US", "Wisconsin", &["US/Central"]),
    ("US", "Wyoming", &["US/Mountain"]),
    (
        "US",
        CATCH_ALL_STATE,
        &[
            "US/Eastern",
            "US/Central",
            "US/Mountain",
            "US/Arizona",
            "US/Pacific",
            "US/Alaska",
            "US/Hawaii",
        ],
    ),
    // Canada
    ("CA", "Alberta", &["America/Edmonton"]),
    ("CA", "British Columbia", &["America/Vancouver", "America/Edmonton"]),
    ("CA", "Manitoba", &["America/Winnipeg"]),
    ("CA", "New Brunswick", &["America/Moncton"]),
    ("CA", "Newfoundland and Labrador", &["America/St_Johns", "America/Goose_Bay"]),
    ("CA", "Northwest Territories", &["America/Edmonton"]),
    ("CA", "Nova Scotia", &["America/Halifax"]),
    ("CA", "Nunavut", &["America/Iqaluit", "America/Rankin_Inlet", "America/Cambridge_Bay"]),
    ("CA", "Ontario", &["America/Toronto", "America/Winnipeg"]),
    ("CA", "Prince Edward Island", &["America/Halifax"]),
    ("CA", "Quebec", &["America/Toronto"]),
    ("CA", "Saskatchewan", &["America/Regina"]),
    ("CA", "Yukon", &["America/Whitehorse"]),
    (
        "CA",
        CATCH_ALL_STATE,
        &[
            "America/St_Johns",
            "America/Halifax",
            "America/Toronto",
            "America/Winnipeg",
            "America/Regina",
            "America/Edmonton",
            "America/Vancouver",
        ],
    ),
    // Australia
    ("AU", "Australian Capital Territory", &["Australia/Sydney"]),
    ("AU", "New South Wales", &["Australia/Sydney", "Australia/Broken_Hill"]),
    ("AU", "Northern Territory", &["Australia/Darwin"]),
    ("AU", "Queensland", &["Australia/Brisbane"]),
    ("AU", "South Australia", &["Australia/Adelaide"]),
    ("AU", "Tasmania", &["Australia/Hobart"]),
    ("AU", "Victoria", &["Australia/Sydney"]),
    ("AU", "Western Australia", &["Australia/Perth"]),
    (
        "AU",
        CATCH_ALL_STATE,
        &[
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Hobart",
            "Australia/Perth",
            "Australia/Sydney",
        ],
    ),
    // Brazil
    ("BR", "Acre", &["America/Rio_Branco"]),
    ("BR", "Alagoas", &["America/Maceio"]),
    ("BR", "Amapá", &["America/Belem"]),
    ("BR", "Amazonas", &["America/Manaus", "America/Eirunepe"]),
    ("BR", "Bahia", &["America/Bahia"]),
    ("BR", "Ceará", &["America/Fortaleza"]),
    ("BR", "Distrito Federal", &["America/Sao_Paulo"]),
    ("BR", "Espírito Santo", &["America/Sao_Paulo"]),
    ("BR", "Goiás", &["America/Sao_Paulo"]),
    ("BR", "Maranhão", &["America/Fortaleza"]),
    ("BR", "Mato Grosso", &["America/Cuiaba"]),
    ("BR", "Mato Grosso do Sul", &["America/Campo_Grande"]),
    ("BR", "Minas Gerais", &["America/Sao_Paulo"]),
    ("BR", "Pará", &["America/Belem", "America/Santarem"]),
    ("BR", "Paraíba", &["America/Recife"]),
    ("BR", "Paraná", &["America/Sao_Paulo"]),
    ("BR", "Pernambuco", &["America/Recife", "America/Noronha"]),
    ("BR", "Piauí", &["America/Fortaleza"]),
    ("BR", "Rio de Janeiro", &["America/Sao_Paulo"]),
    ("BR", "Rio Grande do Norte", &["America/Fortaleza"]),
    ("BR", "Rio Grande do Sul", &["America/Sao_Paulo"]),
    ("BR", "Rondônia", &["America/Porto_Velho"]),
    ("BR", "Roraima", &["America/Boa_Vista"]),
    ("BR", "Santa Catarina", &["America/Sao_Paulo"]),
    ("BR", "São Paulo", &["America/Sao_Paulo"]),
    ("BR", "Sergipe", &["America/Maceio"]),
    ("BR", "Tocantins", &["America/Araguaina"]),
    (
        "BR",
        CATCH_ALL_STATE,
        &[
            "America/Noronha",
            "America/Sao_Paulo",
            "America/Bahia",
            "America/Fortaleza",
            "America/Recife",
            "America/Belem",
            "America/Manaus",
            "America/Cuiaba",
            "America/Porto_Velho",
            "America/Rio_Branco",
        ],
    ),
    // Mexico
    ("MX", "Baja California", &["America/Tijuana"]),
    ("MX", "Baja California Sur", &["America/Mazatlan"]),
    ("MX", "Campeche", &["America/Merida"]),
    ("MX", "Chihuahua", &["America/Chihuahua", "America/Ojinaga"]),
    ("MX", "Coahuila", &["America/Monterrey", "America/Matamoros"]),
    ("MX", "Nayarit", &["America/Mazatlan", "America/Bahia_Banderas"]),
    ("MX", "Nuevo León", &["America/Monterrey"]),
    ("MX", "Quintana Roo", &["America/Cancun"]),
    ("MX", "Sinaloa", &["America/Mazatlan"]),
    ("MX", "Sonora", &["America/Hermosillo"]),
    ("MX", "Tamaulipas", &["America/Matamoros", "America/Monterrey"]),
    ("MX", "Yucatán", &["America/Merida"]),
    (
        "MX",
        CATCH_ALL_STATE,
        &[
            "America/Mexico_City",
            "America/Cancun",
            "America/Chihuahua",
            "America/Mazatlan",
            "America/Hermosillo",
            "America/Tijuana",
        ],
    ),
    // Russia
    (
        "RU",
        CATCH_ALL_STATE,
        &[
            "Europe/Kaliningrad",
            "Europe/Moscow",
            "Europe/Samara",
            "Asia/Yekaterinburg",
            "Asia/Omsk",
            "Asia/Novosibirsk",
            "Asia/Krasnoyarsk",
            "Asia/Irkutsk",
            "Asia/Yakutsk",
            "Asia/Vladivostok",
            "Asia/Magadan",
            "Asia/Kamchatka",
        ],
    ),
    // Indonesia
    ("ID", "Bali", &["Asia/Makassar"]),
    ("ID", "Papua", &["Asia/Jayapura"]),
    ("ID", "Daerah Khusus Ibukota Jakarta", &["Asia/Jakarta"]),
    (
        "ID",
        CATCH_ALL_STATE,
        &["Asia/Jakarta", "Asia/Pontianak", "Asia/Makassar", "Asia/Jayapura"],
    ),
    // Kazakhstan
    (
        "KZ",
        CATCH_ALL_STATE,
        &["Asia/Almaty", "Asia/Qyzylorda", "Asia/Aqtobe", "Asia/Aqtau", "Asia/Oral"],
    ),
    // Chile
    ("CL", "Magallanes", &["America/Punta_Arenas"]),
    (
        "CL",
        CATCH_ALL_STATE,
        &["America/Santiago", "America/Punta_Arenas", "Pacific/Easter"],
    ),
    // Ecuador
    ("EC", "Galápagos", &["Pacific/Galapagos"]),
    ("EC", CATCH_ALL_STATE, &["America/Guayaquil", "Pacific/Galapagos"]),
    // Spain
    ("ES", "Canarias", &["Atlantic/Canary"]),
    ("ES", "Canary Islands", &["Atlantic/Canary"]),
    ("ES", CATCH_ALL_STATE, &["Europe/Madrid", "Atlantic/Canary"]),
    // Portugal
    ("PT", "Azores", &["Atlantic/Azores"]),
    ("PT", "Madeira", &["Atlantic/Madeira"]),
    (
        "PT",
        CATCH_ALL_STATE,
        &["Europe/Lisbon", "Atlantic/Madeira", "Atlantic/Azores"],
    ),
    // New Zealand
    ("NZ", CATCH_ALL_STATE, &["Pacific/Auckland", "Pacific/Chatham"]),
    // Democratic Republic of the Congo
    ("CD", CATCH_ALL_STATE, &["Africa/Kinshasa", "Africa/Lubumbashi"]),
    // Malaysia
    ("MY", "Sabah", &["Asia/Kuching"]),
    ("MY", "Sarawak", &["Asia/Kuching"]),
    ("MY", CATCH_ALL_STATE, &["Asia/Kuala_Lumpur", "Asia/Kuching"]),
    // Mongolia
    ("MN", CATCH_ALL_STATE, &["Asia/Ulaanbaatar", "Asia/Hovd"]),
    // Greenland
    (
        "GL",
        CATCH_ALL_STATE,
        &["America/Nuuk", "America/Danmarkshavn", "America/Scoresbysund", "America/Thule"],
    ),
];

pub(crate) static ZONE_CATALOGUE: &[(&str, &str)] = &[
    ("UTC", "Coordinated Universal Time"),
    ("Pacific/Pago_Pago", "American Samoa"),
    ("US/Hawaii", "Hawaii"),
    ("US/Aleutian", "Aleutian Islands"),
    ("US/Alaska", "Alaska"),
    ("US/Pacific", "Pacific Time (US & Canada)"),
    ("America/Tijuana", "Tijuana"),
    ("America/Vancouver", "Vancouver"),
    ("US/Arizona", "Arizona"),
    ("US/Mountain", "Mountain Time (US & Canada)"),
    ("America/Edmonton", "Edmonton, Calgary"),
    ("America/Chihuahua", "Chihuahua"),
    ("America/Mazatlan", "Mazatlán, La Paz"),
    ("America/Hermosillo", "Hermosillo"),
    ("US/Central", "Central Time (US & Canada)"),
    ("America/Winnipeg", "Winnipeg"),
    ("America/Regina", "Saskatchewan"),
    ("America/Mexico_City", "Mexico City, Guadalajara, Monterrey"),
    ("America/Guatemala", "Central America"),
    ("US/Eastern", "Eastern Time (US & Canada)"),
    ("America/Toronto", "Toronto, Ottawa, Montreal"),
    ("America/Bogota", "Bogotá, Lima, Quito"),
    ("America/Cancun", "Cancún"),
    ("America/Havana", "Havana"),
    ("America/Caracas", "Caracas"),
    ("America/Halifax", "Atlantic Time (Canada)"),
    ("America/Santiago", "Santiago"),
    ("America/La_Paz", "La Paz"),
    ("America/Manaus", "Manaus"),
    ("America/St_Johns", "Newfoundland"),
    ("America/Sao_Paulo", "Brasília, São Paulo, Rio de Janeiro"),
    ("America/Argentina/Buenos_Aires", "Buenos Aires"),
    ("America/Montevideo", "Montevideo"),
    ("America/Nuuk", "Greenland"),
    ("America/Noronha", "Fernando de Noronha"),
    ("Atlantic/South_Georgia", "South Georgia"),
    ("Atlantic/Azores", "Azores"),
    ("Atlantic/Cape_Verde", "Cape Verde"),
    ("Europe/London", "London, Edinburgh, Cardiff"),
    ("Europe/Dublin", "Dublin"),
    ("Europe/Lisbon", "Lisbon"),
    ("Atlantic/Canary", "Canary Islands"),
    ("Atlantic/Reykjavik", "Reykjavík"),
    ("Africa/Casablanca", "Casablanca"),
    ("Europe/Paris", "Paris, Brussels, Madrid"),
    ("Europe/Berlin", "Berlin, Amsterdam, Rome, Vienna"),
    ("Europe/Warsaw", "Warsaw, Prague, Budapest"),
    ("Africa/Lagos", "West Central Africa"),
    ("Europe/Athens", "Athens, Bucharest"),
    ("Europe/Helsinki", "Helsinki, Kyiv, Riga"),
    ("Europe/Istanbul", "Istanbul"),
    ("Asia/Jerusalem", "Jerusalem"),
    ("Africa/Cairo", "Cairo"),
    ("Africa/Johannesburg", "Johannesburg, Harare"),
    ("Europe/Moscow", "Moscow, St. Petersburg"),
    ("Asia/Riyadh", "Riyadh, Kuwait"),
    ("Africa/Nairobi", "Nairobi"),
    ("Asia/Tehran", "Tehran"),
    ("Asia/Dubai", "Abu Dhabi, Muscat"),
    ("Asia/Baku", "Baku, Tbilisi, Yerevan"),
    ("Asia/Kabul", "Kabul"),
    ("Asia/Yekaterinburg", "Yekaterinburg"),
    ("Asia/Karachi", "Islamabad, Karachi"),
    ("Asia/Kolkata", "Mumbai, New Delhi, Kolkata"),
    ("Asia/Kathmandu", "Kathmandu"),
    ("Asia/Dhaka", "Dhaka"),
    ("Asia/Almaty", "Almaty"),
    ("Asia/Yangon", "Yangon"),
    ("Asia/Bangkok", "Bangkok, Hanoi"),
    ("Asia/Jakarta", "Jakarta"),
    ("Asia/Krasnoyarsk", "Krasnoyarsk"),
    ("Asia/Shanghai", "Beijing, Shanghai"),
    ("Asia/Hong_Kong", "Hong Kong"),
    ("Asia/Singapore", "Singapore, Kuala Lumpur"),
    ("Asia/Taipei", "Taipei"),
    ("Australia/Perth", "Perth"),
    ("Asia/Irkutsk", "Irkutsk"),
    ("Asia/Tokyo", "Tokyo, Osaka"),
    ("Asia/Seoul", "Seoul"),
    ("Asia/Yakutsk", "Yakutsk"),
    ("Australia/Darwin", "Darwin"),
    ("Australia/Adelaide", "Adelaide"),
    ("Australia/Brisbane", "Brisbane"),
    ("Australia/Sydney", "Sydney, Melbourne, Canberra"),
    ("Australia/Hobart", "Hobart"),
    ("Pacific/Guam", "Guam, Port Moresby"),
    ("Asia/Vladivostok", "Vladivostok"),
    ("Asia/Magadan", "Magadan, Solomon Islands"),
    ("Pacific/Auckland", "Auckland, Wellington"),
    ("Pacific/Fiji", "Fiji"),
    ("Asia/Kamchatka", "Kamchatka"),
    ("Pacific/Chatham", "Chatham Islands"),
    ("Pacific/Tongatapu", "Nuku'alofa"),
    ("Pacific/Kiritimati", "Kiritimati"),
];
