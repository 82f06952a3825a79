use super::CountryData;

/*
 * ISO 3166-1 assigned entries, one per country or territory, in curated order.
 * `name` follows the ISO short name in title case, `short_name` the common English
 * designation. Currency lists keep their curated order: legal tender first, then
 * currencies in transitional or parallel use.
 */

pub(super) const COUNTRY_DATA: [CountryData; 249] = [
    CountryData {
        name: "Afghanistan",
        short_name: "Afghanistan",
        alpha2: "AF",
        alpha3: "AFG",
        numeric: "004",
        currencies: &["AFN"],
    },
    CountryData {
        name: "Åland Islands",
        short_name: "Åland Islands",
        alpha2: "AX",
        alpha3: "ALA",
        numeric: "248",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Albania",
        short_name: "Albania",
        alpha2: "AL",
        alpha3: "ALB",
        numeric: "008",
        currencies: &["ALL"],
    },
    CountryData {
        name: "Algeria",
        short_name: "Algeria",
        alpha2: "DZ",
        alpha3: "DZA",
        numeric: "012",
        currencies: &["DZD"],
    },
    CountryData {
        name: "American Samoa",
        short_name: "American Samoa",
        alpha2: "AS",
        alpha3: "ASM",
        numeric: "016",
        currencies: &["USD"],
    },
    CountryData {
        name: "Andorra",
        short_name: "Andorra",
        alpha2: "AD",
        alpha3: "AND",
        numeric: "020",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Angola",
        short_name: "Angola",
        alpha2: "AO",
        alpha3: "AGO",
        numeric: "024",
        currencies: &["AOA"],
    },
    CountryData {
        name: "Anguilla",
        short_name: "Anguilla",
        alpha2: "AI",
        alpha3: "AIA",
        numeric: "660",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Antarctica",
        short_name: "Antarctica",
        alpha2: "AQ",
        alpha3: "ATA",
        numeric: "010",
        currencies: &[
            "ARS", "AUD", "BGN", "BRL", "BYR", "CLP", "CNY", "CZK", "EUR", "GBP", "INR", "JPY",
            "KRW", "NOK", "NZD", "PEN", "PKR", "PLN", "RON", "RUB", "SEK", "UAH", "USD", "UYU",
            "ZAR",
        ],
    },
    CountryData {
        name: "Antigua and Barbuda",
        short_name: "Antigua and Barbuda",
        alpha2: "AG",
        alpha3: "ATG",
        numeric: "028",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Argentina",
        short_name: "Argentina",
        alpha2: "AR",
        alpha3: "ARG",
        numeric: "032",
        currencies: &["ARS"],
    },
    CountryData {
        name: "Armenia",
        short_name: "Armenia",
        alpha2: "AM",
        alpha3: "ARM",
        numeric: "051",
        currencies: &["AMD"],
    },
    CountryData {
        name: "Aruba",
        short_name: "Aruba",
        alpha2: "AW",
        alpha3: "ABW",
        numeric: "533",
        currencies: &["AWG"],
    },
    CountryData {
        name: "Australia",
        short_name: "Australia",
        alpha2: "AU",
        alpha3: "AUS",
        numeric: "036",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Austria",
        short_name: "Austria",
        alpha2: "AT",
        alpha3: "AUT",
        numeric: "040",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Azerbaijan",
        short_name: "Azerbaijan",
        alpha2: "AZ",
        alpha3: "AZE",
        numeric: "031",
        currencies: &["AZN"],
    },
    CountryData {
        name: "Bahamas",
        short_name: "Bahamas",
        alpha2: "BS",
        alpha3: "BHS",
        numeric: "044",
        currencies: &["BSD"],
    },
    CountryData {
        name: "Bahrain",
        short_name: "Bahrain",
        alpha2: "BH",
        alpha3: "BHR",
        numeric: "048",
        currencies: &["BHD"],
    },
    CountryData {
        name: "Bangladesh",
        short_name: "Bangladesh",
        alpha2: "BD",
        alpha3: "BGD",
        numeric: "050",
        currencies: &["BDT"],
    },
    CountryData {
        name: "Barbados",
        short_name: "Barbados",
        alpha2: "BB",
        alpha3: "BRB",
        numeric: "052",
        currencies: &["BBD"],
    },
    CountryData {
        name: "Belarus",
        short_name: "Belarus",
        alpha2: "BY",
        alpha3: "BLR",
        numeric: "112",
        currencies: &["BYN"],
    },
    CountryData {
        name: "Belgium",
        short_name: "Belgium",
        alpha2: "BE",
        alpha3: "BEL",
        numeric: "056",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Belize",
        short_name: "Belize",
        alpha2: "BZ",
        alpha3: "BLZ",
        numeric: "084",
        currencies: &["BZD"],
    },
    CountryData {
        name: "Benin",
        short_name: "Benin",
        alpha2: "BJ",
        alpha3: "BEN",
        numeric: "204",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Bermuda",
        short_name: "Bermuda",
        alpha2: "BM",
        alpha3: "BMU",
        numeric: "060",
        currencies: &["BMD"],
    },
    CountryData {
        name: "Bhutan",
        short_name: "Bhutan",
        alpha2: "BT",
        alpha3: "BTN",
        numeric: "064",
        currencies: &["BTN", "INR"],
    },
    CountryData {
        name: "Bolivia (Plurinational State of)",
        short_name: "Bolivia",
        alpha2: "BO",
        alpha3: "BOL",
        numeric: "068",
        currencies: &["BOB"],
    },
    CountryData {
        name: "Bonaire, Sint Eustatius and Saba",
        short_name: "Caribbean Netherlands",
        alpha2: "BQ",
        alpha3: "BES",
        numeric: "535",
        currencies: &["USD"],
    },
    CountryData {
        name: "Bosnia and Herzegovina",
        short_name: "Bosnia and Herzegovina",
        alpha2: "BA",
        alpha3: "BIH",
        numeric: "070",
        currencies: &["BAM"],
    },
    CountryData {
        name: "Botswana",
        short_name: "Botswana",
        alpha2: "BW",
        alpha3: "BWA",
        numeric: "072",
        currencies: &["BWP"],
    },
    CountryData {
        name: "Bouvet Island",
        short_name: "Bouvet Island",
        alpha2: "BV",
        alpha3: "BVT",
        numeric: "074",
        currencies: &["NOK"],
    },
    CountryData {
        name: "Brazil",
        short_name: "Brazil",
        alpha2: "BR",
        alpha3: "BRA",
        numeric: "076",
        currencies: &["BRL"],
    },
    CountryData {
        name: "British Indian Ocean Territory",
        short_name: "British Indian Ocean Territory",
        alpha2: "IO",
        alpha3: "IOT",
        numeric: "086",
        currencies: &["USD"],
    },
    CountryData {
        name: "Brunei Darussalam",
        short_name: "Brunei",
        alpha2: "BN",
        alpha3: "BRN",
        numeric: "096",
        currencies: &["BND", "SGD"],
    },
    CountryData {
        name: "Bulgaria",
        short_name: "Bulgaria",
        alpha2: "BG",
        alpha3: "BGR",
        numeric: "100",
        currencies: &["BGN"],
    },
    CountryData {
        name: "Burkina Faso",
        short_name: "Burkina Faso",
        alpha2: "BF",
        alpha3: "BFA",
        numeric: "854",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Burundi",
        short_name: "Burundi",
        alpha2: "BI",
        alpha3: "BDI",
        numeric: "108",
        currencies: &["BIF"],
    },
    CountryData {
        name: "Cabo Verde",
        short_name: "Cabo Verde",
        alpha2: "CV",
        alpha3: "CPV",
        numeric: "132",
        currencies: &["CVE"],
    },
    CountryData {
        name: "Cambodia",
        short_name: "Cambodia",
        alpha2: "KH",
        alpha3: "KHM",
        numeric: "116",
        currencies: &["KHR"],
    },
    CountryData {
        name: "Cameroon",
        short_name: "Cameroon",
        alpha2: "CM",
        alpha3: "CMR",
        numeric: "120",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Canada",
        short_name: "Canada",
        alpha2: "CA",
        alpha3: "CAN",
        numeric: "124",
        currencies: &["CAD"],
    },
    CountryData {
        name: "Cayman Islands",
        short_name: "Cayman Islands",
        alpha2: "KY",
        alpha3: "CYM",
        numeric: "136",
        currencies: &["KYD"],
    },
    CountryData {
        name: "Central African Republic",
        short_name: "Central African Republic",
        alpha2: "CF",
        alpha3: "CAF",
        numeric: "140",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Chad",
        short_name: "Chad",
        alpha2: "TD",
        alpha3: "TCD",
        numeric: "148",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Chile",
        short_name: "Chile",
        alpha2: "CL",
        alpha3: "CHL",
        numeric: "152",
        currencies: &["CLP"],
    },
    CountryData {
        name: "China",
        short_name: "China",
        alpha2: "CN",
        alpha3: "CHN",
        numeric: "156",
        currencies: &["CNY"],
    },
    CountryData {
        name: "Christmas Island",
        short_name: "Christmas Island",
        alpha2: "CX",
        alpha3: "CXR",
        numeric: "162",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Cocos (Keeling) Islands",
        short_name: "Cocos Islands",
        alpha2: "CC",
        alpha3: "CCK",
        numeric: "166",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Colombia",
        short_name: "Colombia",
        alpha2: "CO",
        alpha3: "COL",
        numeric: "170",
        currencies: &["COP"],
    },
    CountryData {
        name: "Comoros",
        short_name: "Comoros",
        alpha2: "KM",
        alpha3: "COM",
        numeric: "174",
        currencies: &["KMF"],
    },
    CountryData {
        name: "Congo",
        short_name: "Republic of the Congo",
        alpha2: "CG",
        alpha3: "COG",
        numeric: "178",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Congo (Democratic Republic of the)",
        short_name: "Democratic Republic of the Congo",
        alpha2: "CD",
        alpha3: "COD",
        numeric: "180",
        currencies: &["CDF"],
    },
    CountryData {
        name: "Cook Islands",
        short_name: "Cook Islands",
        alpha2: "CK",
        alpha3: "COK",
        numeric: "184",
        currencies: &["NZD"],
    },
    CountryData {
        name: "Costa Rica",
        short_name: "Costa Rica",
        alpha2: "CR",
        alpha3: "CRI",
        numeric: "188",
        currencies: &["CRC"],
    },
    CountryData {
        name: "Côte d'Ivoire",
        short_name: "Ivory Coast",
        alpha2: "CI",
        alpha3: "CIV",
        numeric: "384",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Croatia",
        short_name: "Croatia",
        alpha2: "HR",
        alpha3: "HRV",
        numeric: "191",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Cuba",
        short_name: "Cuba",
        alpha2: "CU",
        alpha3: "CUB",
        numeric: "192",
        currencies: &["CUP", "CUC"],
    },
    CountryData {
        name: "Curaçao",
        short_name: "Curaçao",
        alpha2: "CW",
        alpha3: "CUW",
        numeric: "531",
        currencies: &["ANG"],
    },
    CountryData {
        name: "Cyprus",
        short_name: "Cyprus",
        alpha2: "CY",
        alpha3: "CYP",
        numeric: "196",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Czechia",
        short_name: "Czechia",
        alpha2: "CZ",
        alpha3: "CZE",
        numeric: "203",
        currencies: &["CZK"],
    },
    CountryData {
        name: "Denmark",
        short_name: "Denmark",
        alpha2: "DK",
        alpha3: "DNK",
        numeric: "208",
        currencies: &["DKK"],
    },
    CountryData {
        name: "Djibouti",
        short_name: "Djibouti",
        alpha2: "DJ",
        alpha3: "DJI",
        numeric: "262",
        currencies: &["DJF"],
    },
    CountryData {
        name: "Dominica",
        short_name: "Dominica",
        alpha2: "DM",
        alpha3: "DMA",
        numeric: "212",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Dominican Republic",
        short_name: "Dominican Republic",
        alpha2: "DO",
        alpha3: "DOM",
        numeric: "214",
        currencies: &["DOP"],
    },
    CountryData {
        name: "Ecuador",
        short_name: "Ecuador",
        alpha2: "EC",
        alpha3: "ECU",
        numeric: "218",
        currencies: &["USD"],
    },
    CountryData {
        name: "Egypt",
        short_name: "Egypt",
        alpha2: "EG",
        alpha3: "EGY",
        numeric: "818",
        currencies: &["EGP"],
    },
    CountryData {
        name: "El Salvador",
        short_name: "El Salvador",
        alpha2: "SV",
        alpha3: "SLV",
        numeric: "222",
        currencies: &["USD"],
    },
    CountryData {
        name: "Equatorial Guinea",
        short_name: "Equatorial Guinea",
        alpha2: "GQ",
        alpha3: "GNQ",
        numeric: "226",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Eritrea",
        short_name: "Eritrea",
        alpha2: "ER",
        alpha3: "ERI",
        numeric: "232",
        currencies: &["ERN"],
    },
    CountryData {
        name: "Estonia",
        short_name: "Estonia",
        alpha2: "EE",
        alpha3: "EST",
        numeric: "233",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Eswatini",
        short_name: "Eswatini",
        alpha2: "SZ",
        alpha3: "SWZ",
        numeric: "748",
        currencies: &["SZL", "ZAR"],
    },
    CountryData {
        name: "Ethiopia",
        short_name: "Ethiopia",
        alpha2: "ET",
        alpha3: "ETH",
        numeric: "231",
        currencies: &["ETB"],
    },
    CountryData {
        name: "Falkland Islands (Malvinas)",
        short_name: "Falkland Islands",
        alpha2: "FK",
        alpha3: "FLK",
        numeric: "238",
        currencies: &["FKP"],
    },
    CountryData {
        name: "Faroe Islands",
        short_name: "Faroe Islands",
        alpha2: "FO",
        alpha3: "FRO",
        numeric: "234",
        currencies: &["DKK"],
    },
    CountryData {
        name: "Fiji",
        short_name: "Fiji",
        alpha2: "FJ",
        alpha3: "FJI",
        numeric: "242",
        currencies: &["FJD"],
    },
    CountryData {
        name: "Finland",
        short_name: "Finland",
        alpha2: "FI",
        alpha3: "FIN",
        numeric: "246",
        currencies: &["EUR"],
    },
    CountryData {
        name: "France",
        short_name: "France",
        alpha2: "FR",
        alpha3: "FRA",
        numeric: "250",
        currencies: &["EUR"],
    },
    CountryData {
        name: "French Guiana",
        short_name: "French Guiana",
        alpha2: "GF",
        alpha3: "GUF",
        numeric: "254",
        currencies: &["EUR"],
    },
    CountryData {
        name: "French Polynesia",
        short_name: "French Polynesia",
        alpha2: "PF",
        alpha3: "PYF",
        numeric: "258",
        currencies: &["XPF"],
    },
    CountryData {
        name: "French Southern Territories",
        short_name: "French Southern Territories",
        alpha2: "TF",
        alpha3: "ATF",
        numeric: "260",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Gabon",
        short_name: "Gabon",
        alpha2: "GA",
        alpha3: "GAB",
        numeric: "266",
        currencies: &["XAF"],
    },
    CountryData {
        name: "Gambia",
        short_name: "Gambia",
        alpha2: "GM",
        alpha3: "GMB",
        numeric: "270",
        currencies: &["GMD"],
    },
    CountryData {
        name: "Georgia",
        short_name: "Georgia",
        alpha2: "GE",
        alpha3: "GEO",
        numeric: "268",
        currencies: &["GEL"],
    },
    CountryData {
        name: "Germany",
        short_name: "Germany",
        alpha2: "DE",
        alpha3: "DEU",
        numeric: "276",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Ghana",
        short_name: "Ghana",
        alpha2: "GH",
        alpha3: "GHA",
        numeric: "288",
        currencies: &["GHS"],
    },
    CountryData {
        name: "Gibraltar",
        short_name: "Gibraltar",
        alpha2: "GI",
        alpha3: "GIB",
        numeric: "292",
        currencies: &["GIP"],
    },
    CountryData {
        name: "Greece",
        short_name: "Greece",
        alpha2: "GR",
        alpha3: "GRC",
        numeric: "300",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Greenland",
        short_name: "Greenland",
        alpha2: "GL",
        alpha3: "GRL",
        numeric: "304",
        currencies: &["DKK"],
    },
    CountryData {
        name: "Grenada",
        short_name: "Grenada",
        alpha2: "GD",
        alpha3: "GRD",
        numeric: "308",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Guadeloupe",
        short_name: "Guadeloupe",
        alpha2: "GP",
        alpha3: "GLP",
        numeric: "312",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Guam",
        short_name: "Guam",
        alpha2: "GU",
        alpha3: "GUM",
        numeric: "316",
        currencies: &["USD"],
    },
    CountryData {
        name: "Guatemala",
        short_name: "Guatemala",
        alpha2: "GT",
        alpha3: "GTM",
        numeric: "320",
        currencies: &["GTQ"],
    },
    CountryData {
        name: "Guernsey",
        short_name: "Guernsey",
        alpha2: "GG",
        alpha3: "GGY",
        numeric: "831",
        currencies: &["GBP"],
    },
    CountryData {
        name: "Guinea",
        short_name: "Guinea",
        alpha2: "GN",
        alpha3: "GIN",
        numeric: "324",
        currencies: &["GNF"],
    },
    CountryData {
        name: "Guinea-Bissau",
        short_name: "Guinea-Bissau",
        alpha2: "GW",
        alpha3: "GNB",
        numeric: "624",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Guyana",
        short_name: "Guyana",
        alpha2: "GY",
        alpha3: "GUY",
        numeric: "328",
        currencies: &["GYD"],
    },
    CountryData {
        name: "Haiti",
        short_name: "Haiti",
        alpha2: "HT",
        alpha3: "HTI",
        numeric: "332",
        currencies: &["HTG", "USD"],
    },
    CountryData {
        name: "Heard Island and McDonald Islands",
        short_name: "Heard Island and McDonald Islands",
        alpha2: "HM",
        alpha3: "HMD",
        numeric: "334",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Holy See",
        short_name: "Vatican City",
        alpha2: "VA",
        alpha3: "VAT",
        numeric: "336",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Honduras",
        short_name: "Honduras",
        alpha2: "HN",
        alpha3: "HND",
        numeric: "340",
        currencies: &["HNL"],
    },
    CountryData {
        name: "Hong Kong",
        short_name: "Hong Kong",
        alpha2: "HK",
        alpha3: "HKG",
        numeric: "344",
        currencies: &["HKD"],
    },
    CountryData {
        name: "Hungary",
        short_name: "Hungary",
        alpha2: "HU",
        alpha3: "HUN",
        numeric: "348",
        currencies: &["HUF"],
    },
    CountryData {
        name: "Iceland",
        short_name: "Iceland",
        alpha2: "IS",
        alpha3: "ISL",
        numeric: "352",
        currencies: &["ISK"],
    },
    CountryData {
        name: "India",
        short_name: "India",
        alpha2: "IN",
        alpha3: "IND",
        numeric: "356",
        currencies: &["INR"],
    },
    CountryData {
        name: "Indonesia",
        short_name: "Indonesia",
        alpha2: "ID",
        alpha3: "IDN",
        numeric: "360",
        currencies: &["IDR"],
    },
    CountryData {
        name: "Iran (Islamic Republic of)",
        short_name: "Iran",
        alpha2: "IR",
        alpha3: "IRN",
        numeric: "364",
        currencies: &["IRR"],
    },
    CountryData {
        name: "Iraq",
        short_name: "Iraq",
        alpha2: "IQ",
        alpha3: "IRQ",
        numeric: "368",
        currencies: &["IQD"],
    },
    CountryData {
        name: "Ireland",
        short_name: "Ireland",
        alpha2: "IE",
        alpha3: "IRL",
        numeric: "372",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Isle of Man",
        short_name: "Isle of Man",
        alpha2: "IM",
        alpha3: "IMN",
        numeric: "833",
        currencies: &["GBP"],
    },
    CountryData {
        name: "Israel",
        short_name: "Israel",
        alpha2: "IL",
        alpha3: "ISR",
        numeric: "376",
        currencies: &["ILS"],
    },
    CountryData {
        name: "Italy",
        short_name: "Italy",
        alpha2: "IT",
        alpha3: "ITA",
        numeric: "380",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Jamaica",
        short_name: "Jamaica",
        alpha2: "JM",
        alpha3: "JAM",
        numeric: "388",
        currencies: &["JMD"],
    },
    CountryData {
        name: "Japan",
        short_name: "Japan",
        alpha2: "JP",
        alpha3: "JPN",
        numeric: "392",
        currencies: &["JPY"],
    },
    CountryData {
        name: "Jersey",
        short_name: "Jersey",
        alpha2: "JE",
        alpha3: "JEY",
        numeric: "832",
        currencies: &["GBP"],
    },
    CountryData {
        name: "Jordan",
        short_name: "Jordan",
        alpha2: "JO",
        alpha3: "JOR",
        numeric: "400",
        currencies: &["JOD"],
    },
    CountryData {
        name: "Kazakhstan",
        short_name: "Kazakhstan",
        alpha2: "KZ",
        alpha3: "KAZ",
        numeric: "398",
        currencies: &["KZT"],
    },
    CountryData {
        name: "Kenya",
        short_name: "Kenya",
        alpha2: "KE",
        alpha3: "KEN",
        numeric: "404",
        currencies: &["KES"],
    },
    CountryData {
        name: "Kiribati",
        short_name: "Kiribati",
        alpha2: "KI",
        alpha3: "KIR",
        numeric: "296",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Korea (Democratic People's Republic of)",
        short_name: "North Korea",
        alpha2: "KP",
        alpha3: "PRK",
        numeric: "408",
        currencies: &["KPW"],
    },
    CountryData {
        name: "Korea (Republic of)",
        short_name: "South Korea",
        alpha2: "KR",
        alpha3: "KOR",
        numeric: "410",
        currencies: &["KRW"],
    },
    CountryData {
        name: "Kuwait",
        short_name: "Kuwait",
        alpha2: "KW",
        alpha3: "KWT",
        numeric: "414",
        currencies: &["KWD"],
    },
    CountryData {
        name: "Kyrgyzstan",
        short_name: "Kyrgyzstan",
        alpha2: "KG",
        alpha3: "KGZ",
        numeric: "417",
        currencies: &["KGS"],
    },
    CountryData {
        name: "Lao People's Democratic Republic",
        short_name: "Laos",
        alpha2: "LA",
        alpha3: "LAO",
        numeric: "418",
        currencies: &["LAK"],
    },
    CountryData {
        name: "Latvia",
        short_name: "Latvia",
        alpha2: "LV",
        alpha3: "LVA",
        numeric: "428",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Lebanon",
        short_name: "Lebanon",
        alpha2: "LB",
        alpha3: "LBN",
        numeric: "422",
        currencies: &["LBP"],
    },
    CountryData {
        name: "Lesotho",
        short_name: "Lesotho",
        alpha2: "LS",
        alpha3: "LSO",
        numeric: "426",
        currencies: &["LSL", "ZAR"],
    },
    CountryData {
        name: "Liberia",
        short_name: "Liberia",
        alpha2: "LR",
        alpha3: "LBR",
        numeric: "430",
        currencies: &["LRD"],
    },
    CountryData {
        name: "Libya",
        short_name: "Libya",
        alpha2: "LY",
        alpha3: "LBY",
        numeric: "434",
        currencies: &["LYD"],
    },
    CountryData {
        name: "Liechtenstein",
        short_name: "Liechtenstein",
        alpha2: "LI",
        alpha3: "LIE",
        numeric: "438",
        currencies: &["CHF"],
    },
    CountryData {
        name: "Lithuania",
        short_name: "Lithuania",
        alpha2: "LT",
        alpha3: "LTU",
        numeric: "440",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Luxembourg",
        short_name: "Luxembourg",
        alpha2: "LU",
        alpha3: "LUX",
        numeric: "442",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Macao",
        short_name: "Macao",
        alpha2: "MO",
        alpha3: "MAC",
        numeric: "446",
        currencies: &["MOP"],
    },
    CountryData {
        name: "Madagascar",
        short_name: "Madagascar",
        alpha2: "MG",
        alpha3: "MDG",
        numeric: "450",
        currencies: &["MGA"],
    },
    CountryData {
        name: "Malawi",
        short_name: "Malawi",
        alpha2: "MW",
        alpha3: "MWI",
        numeric: "454",
        currencies: &["MWK"],
    },
    CountryData {
        name: "Malaysia",
        short_name: "Malaysia",
        alpha2: "MY",
        alpha3: "MYS",
        numeric: "458",
        currencies: &["MYR"],
    },
    CountryData {
        name: "Maldives",
        short_name: "Maldives",
        alpha2: "MV",
        alpha3: "MDV",
        numeric: "462",
        currencies: &["MVR"],
    },
    CountryData {
        name: "Mali",
        short_name: "Mali",
        alpha2: "ML",
        alpha3: "MLI",
        numeric: "466",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Malta",
        short_name: "Malta",
        alpha2: "MT",
        alpha3: "MLT",
        numeric: "470",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Marshall Islands",
        short_name: "Marshall Islands",
        alpha2: "MH",
        alpha3: "MHL",
        numeric: "584",
        currencies: &["USD"],
    },
    CountryData {
        name: "Martinique",
        short_name: "Martinique",
        alpha2: "MQ",
        alpha3: "MTQ",
        numeric: "474",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Mauritania",
        short_name: "Mauritania",
        alpha2: "MR",
        alpha3: "MRT",
        numeric: "478",
        currencies: &["MRU"],
    },
    CountryData {
        name: "Mauritius",
        short_name: "Mauritius",
        alpha2: "MU",
        alpha3: "MUS",
        numeric: "480",
        currencies: &["MUR"],
    },
    CountryData {
        name: "Mayotte",
        short_name: "Mayotte",
        alpha2: "YT",
        alpha3: "MYT",
        numeric: "175",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Mexico",
        short_name: "Mexico",
        alpha2: "MX",
        alpha3: "MEX",
        numeric: "484",
        currencies: &["MXN"],
    },
    CountryData {
        name: "Micronesia (Federated States of)",
        short_name: "Micronesia",
        alpha2: "FM",
        alpha3: "FSM",
        numeric: "583",
        currencies: &["USD"],
    },
    CountryData {
        name: "Moldova (Republic of)",
        short_name: "Moldova",
        alpha2: "MD",
        alpha3: "MDA",
        numeric: "498",
        currencies: &["MDL"],
    },
    CountryData {
        name: "Monaco",
        short_name: "Monaco",
        alpha2: "MC",
        alpha3: "MCO",
        numeric: "492",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Mongolia",
        short_name: "Mongolia",
        alpha2: "MN",
        alpha3: "MNG",
        numeric: "496",
        currencies: &["MNT"],
    },
    CountryData {
        name: "Montenegro",
        short_name: "Montenegro",
        alpha2: "ME",
        alpha3: "MNE",
        numeric: "499",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Montserrat",
        short_name: "Montserrat",
        alpha2: "MS",
        alpha3: "MSR",
        numeric: "500",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Morocco",
        short_name: "Morocco",
        alpha2: "MA",
        alpha3: "MAR",
        numeric: "504",
        currencies: &["MAD"],
    },
    CountryData {
        name: "Mozambique",
        short_name: "Mozambique",
        alpha2: "MZ",
        alpha3: "MOZ",
        numeric: "508",
        currencies: &["MZN"],
    },
    CountryData {
        name: "Myanmar",
        short_name: "Myanmar",
        alpha2: "MM",
        alpha3: "MMR",
        numeric: "104",
        currencies: &["MMK"],
    },
    CountryData {
        name: "Namibia",
        short_name: "Namibia",
        alpha2: "NA",
        alpha3: "NAM",
        numeric: "516",
        currencies: &["NAD", "ZAR"],
    },
    CountryData {
        name: "Nauru",
        short_name: "Nauru",
        alpha2: "NR",
        alpha3: "NRU",
        numeric: "520",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Nepal",
        short_name: "Nepal",
        alpha2: "NP",
        alpha3: "NPL",
        numeric: "524",
        currencies: &["NPR"],
    },
    CountryData {
        name: "Netherlands",
        short_name: "Netherlands",
        alpha2: "NL",
        alpha3: "NLD",
        numeric: "528",
        currencies: &["EUR"],
    },
    CountryData {
        name: "New Caledonia",
        short_name: "New Caledonia",
        alpha2: "NC",
        alpha3: "NCL",
        numeric: "540",
        currencies: &["XPF"],
    },
    CountryData {
        name: "New Zealand",
        short_name: "New Zealand",
        alpha2: "NZ",
        alpha3: "NZL",
        numeric: "554",
        currencies: &["NZD"],
    },
    CountryData {
        name: "Nicaragua",
        short_name: "Nicaragua",
        alpha2: "NI",
        alpha3: "NIC",
        numeric: "558",
        currencies: &["NIO"],
    },
    CountryData {
        name: "Niger",
        short_name: "Niger",
        alpha2: "NE",
        alpha3: "NER",
        numeric: "562",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Nigeria",
        short_name: "Nigeria",
        alpha2: "NG",
        alpha3: "NGA",
        numeric: "566",
        currencies: &["NGN"],
    },
    CountryData {
        name: "Niue",
        short_name: "Niue",
        alpha2: "NU",
        alpha3: "NIU",
        numeric: "570",
        currencies: &["NZD"],
    },
    CountryData {
        name: "Norfolk Island",
        short_name: "Norfolk Island",
        alpha2: "NF",
        alpha3: "NFK",
        numeric: "574",
        currencies: &["AUD"],
    },
    CountryData {
        name: "North Macedonia",
        short_name: "North Macedonia",
        alpha2: "MK",
        alpha3: "MKD",
        numeric: "807",
        currencies: &["MKD"],
    },
    CountryData {
        name: "Northern Mariana Islands",
        short_name: "Northern Mariana Islands",
        alpha2: "MP",
        alpha3: "MNP",
        numeric: "580",
        currencies: &["USD"],
    },
    CountryData {
        name: "Norway",
        short_name: "Norway",
        alpha2: "NO",
        alpha3: "NOR",
        numeric: "578",
        currencies: &["NOK"],
    },
    CountryData {
        name: "Oman",
        short_name: "Oman",
        alpha2: "OM",
        alpha3: "OMN",
        numeric: "512",
        currencies: &["OMR"],
    },
    CountryData {
        name: "Pakistan",
        short_name: "Pakistan",
        alpha2: "PK",
        alpha3: "PAK",
        numeric: "586",
        currencies: &["PKR"],
    },
    CountryData {
        name: "Palau",
        short_name: "Palau",
        alpha2: "PW",
        alpha3: "PLW",
        numeric: "585",
        currencies: &["USD"],
    },
    CountryData {
        name: "Palestine, State of",
        short_name: "Palestine",
        alpha2: "PS",
        alpha3: "PSE",
        numeric: "275",
        currencies: &["ILS"],
    },
    CountryData {
        name: "Panama",
        short_name: "Panama",
        alpha2: "PA",
        alpha3: "PAN",
        numeric: "591",
        currencies: &["PAB", "USD"],
    },
    CountryData {
        name: "Papua New Guinea",
        short_name: "Papua New Guinea",
        alpha2: "PG",
        alpha3: "PNG",
        numeric: "598",
        currencies: &["PGK"],
    },
    CountryData {
        name: "Paraguay",
        short_name: "Paraguay",
        alpha2: "PY",
        alpha3: "PRY",
        numeric: "600",
        currencies: &["PYG"],
    },
    CountryData {
        name: "Peru",
        short_name: "Peru",
        alpha2: "PE",
        alpha3: "PER",
        numeric: "604",
        currencies: &["PEN"],
    },
    CountryData {
        name: "Philippines",
        short_name: "Philippines",
        alpha2: "PH",
        alpha3: "PHL",
        numeric: "608",
        currencies: &["PHP"],
    },
    CountryData {
        name: "Pitcairn",
        short_name: "Pitcairn Islands",
        alpha2: "PN",
        alpha3: "PCN",
        numeric: "612",
        currencies: &["NZD"],
    },
    CountryData {
        name: "Poland",
        short_name: "Poland",
        alpha2: "PL",
        alpha3: "POL",
        numeric: "616",
        currencies: &["PLN"],
    },
    CountryData {
        name: "Portugal",
        short_name: "Portugal",
        alpha2: "PT",
        alpha3: "PRT",
        numeric: "620",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Puerto Rico",
        short_name: "Puerto Rico",
        alpha2: "PR",
        alpha3: "PRI",
        numeric: "630",
        currencies: &["USD"],
    },
    CountryData {
        name: "Qatar",
        short_name: "Qatar",
        alpha2: "QA",
        alpha3: "QAT",
        numeric: "634",
        currencies: &["QAR"],
    },
    CountryData {
        name: "Réunion",
        short_name: "Réunion",
        alpha2: "RE",
        alpha3: "REU",
        numeric: "638",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Romania",
        short_name: "Romania",
        alpha2: "RO",
        alpha3: "ROU",
        numeric: "642",
        currencies: &["RON"],
    },
    CountryData {
        name: "Russian Federation",
        short_name: "Russia",
        alpha2: "RU",
        alpha3: "RUS",
        numeric: "643",
        currencies: &["RUB"],
    },
    CountryData {
        name: "Rwanda",
        short_name: "Rwanda",
        alpha2: "RW",
        alpha3: "RWA",
        numeric: "646",
        currencies: &["RWF"],
    },
    CountryData {
        name: "Saint Barthélemy",
        short_name: "Saint Barthélemy",
        alpha2: "BL",
        alpha3: "BLM",
        numeric: "652",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Saint Helena, Ascension and Tristan da Cunha",
        short_name: "Saint Helena",
        alpha2: "SH",
        alpha3: "SHN",
        numeric: "654",
        currencies: &["SHP"],
    },
    CountryData {
        name: "Saint Kitts and Nevis",
        short_name: "Saint Kitts and Nevis",
        alpha2: "KN",
        alpha3: "KNA",
        numeric: "659",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Saint Lucia",
        short_name: "Saint Lucia",
        alpha2: "LC",
        alpha3: "LCA",
        numeric: "662",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Saint Martin (French part)",
        short_name: "Saint Martin",
        alpha2: "MF",
        alpha3: "MAF",
        numeric: "663",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Saint Pierre and Miquelon",
        short_name: "Saint Pierre and Miquelon",
        alpha2: "PM",
        alpha3: "SPM",
        numeric: "666",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Saint Vincent and the Grenadines",
        short_name: "Saint Vincent and the Grenadines",
        alpha2: "VC",
        alpha3: "VCT",
        numeric: "670",
        currencies: &["XCD"],
    },
    CountryData {
        name: "Samoa",
        short_name: "Samoa",
        alpha2: "WS",
        alpha3: "WSM",
        numeric: "882",
        currencies: &["WST"],
    },
    CountryData {
        name: "San Marino",
        short_name: "San Marino",
        alpha2: "SM",
        alpha3: "SMR",
        numeric: "674",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Sao Tome and Principe",
        short_name: "Sao Tome and Principe",
        alpha2: "ST",
        alpha3: "STP",
        numeric: "678",
        currencies: &["STN"],
    },
    CountryData {
        name: "Saudi Arabia",
        short_name: "Saudi Arabia",
        alpha2: "SA",
        alpha3: "SAU",
        numeric: "682",
        currencies: &["SAR"],
    },
    CountryData {
        name: "Senegal",
        short_name: "Senegal",
        alpha2: "SN",
        alpha3: "SEN",
        numeric: "686",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Serbia",
        short_name: "Serbia",
        alpha2: "RS",
        alpha3: "SRB",
        numeric: "688",
        currencies: &["RSD"],
    },
    CountryData {
        name: "Seychelles",
        short_name: "Seychelles",
        alpha2: "SC",
        alpha3: "SYC",
        numeric: "690",
        currencies: &["SCR"],
    },
    CountryData {
        name: "Sierra Leone",
        short_name: "Sierra Leone",
        alpha2: "SL",
        alpha3: "SLE",
        numeric: "694",
        currencies: &["SLE", "SLL"],
    },
    CountryData {
        name: "Singapore",
        short_name: "Singapore",
        alpha2: "SG",
        alpha3: "SGP",
        numeric: "702",
        currencies: &["SGD"],
    },
    CountryData {
        name: "Sint Maarten (Dutch part)",
        short_name: "Sint Maarten",
        alpha2: "SX",
        alpha3: "SXM",
        numeric: "534",
        currencies: &["ANG"],
    },
    CountryData {
        name: "Slovakia",
        short_name: "Slovakia",
        alpha2: "SK",
        alpha3: "SVK",
        numeric: "703",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Slovenia",
        short_name: "Slovenia",
        alpha2: "SI",
        alpha3: "SVN",
        numeric: "705",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Solomon Islands",
        short_name: "Solomon Islands",
        alpha2: "SB",
        alpha3: "SLB",
        numeric: "090",
        currencies: &["SBD"],
    },
    CountryData {
        name: "Somalia",
        short_name: "Somalia",
        alpha2: "SO",
        alpha3: "SOM",
        numeric: "706",
        currencies: &["SOS"],
    },
    CountryData {
        name: "South Africa",
        short_name: "South Africa",
        alpha2: "ZA",
        alpha3: "ZAF",
        numeric: "710",
        currencies: &["ZAR"],
    },
    CountryData {
        name: "South Georgia and the South Sandwich Islands",
        short_name: "South Georgia and the South Sandwich Islands",
        alpha2: "GS",
        alpha3: "SGS",
        numeric: "239",
        currencies: &["GBP"],
    },
    CountryData {
        name: "South Sudan",
        short_name: "South Sudan",
        alpha2: "SS",
        alpha3: "SSD",
        numeric: "728",
        currencies: &["SSP"],
    },
    CountryData {
        name: "Spain",
        short_name: "Spain",
        alpha2: "ES",
        alpha3: "ESP",
        numeric: "724",
        currencies: &["EUR"],
    },
    CountryData {
        name: "Sri Lanka",
        short_name: "Sri Lanka",
        alpha2: "LK",
        alpha3: "LKA",
        numeric: "144",
        currencies: &["LKR"],
    },
    CountryData {
        name: "Sudan",
        short_name: "Sudan",
        alpha2: "SD",
        alpha3: "SDN",
        numeric: "729",
        currencies: &["SDG"],
    },
    CountryData {
        name: "Suriname",
        short_name: "Suriname",
        alpha2: "SR",
        alpha3: "SUR",
        numeric: "740",
        currencies: &["SRD"],
    },
    CountryData {
        name: "Svalbard and Jan Mayen",
        short_name: "Svalbard and Jan Mayen",
        alpha2: "SJ",
        alpha3: "SJM",
        numeric: "744",
        currencies: &["NOK"],
    },
    CountryData {
        name: "Sweden",
        short_name: "Sweden",
        alpha2: "SE",
        alpha3: "SWE",
        numeric: "752",
        currencies: &["SEK"],
    },
    CountryData {
        name: "Switzerland",
        short_name: "Switzerland",
        alpha2: "CH",
        alpha3: "CHE",
        numeric: "756",
        currencies: &["CHF"],
    },
    CountryData {
        name: "Syrian Arab Republic",
        short_name: "Syria",
        alpha2: "SY",
        alpha3: "SYR",
        numeric: "760",
        currencies: &["SYP"],
    },
    CountryData {
        name: "Taiwan (Province of China)",
        short_name: "Taiwan",
        alpha2: "TW",
        alpha3: "TWN",
        numeric: "158",
        currencies: &["TWD"],
    },
    CountryData {
        name: "Tajikistan",
        short_name: "Tajikistan",
        alpha2: "TJ",
        alpha3: "TJK",
        numeric: "762",
        currencies: &["TJS"],
    },
    CountryData {
        name: "Tanzania, United Republic of",
        short_name: "Tanzania",
        alpha2: "TZ",
        alpha3: "TZA",
        numeric: "834",
        currencies: &["TZS"],
    },
    CountryData {
        name: "Thailand",
        short_name: "Thailand",
        alpha2: "TH",
        alpha3: "THA",
        numeric: "764",
        currencies: &["THB"],
    },
    CountryData {
        name: "Timor-Leste",
        short_name: "East Timor",
        alpha2: "TL",
        alpha3: "TLS",
        numeric: "626",
        currencies: &["USD"],
    },
    CountryData {
        name: "Togo",
        short_name: "Togo",
        alpha2: "TG",
        alpha3: "TGO",
        numeric: "768",
        currencies: &["XOF"],
    },
    CountryData {
        name: "Tokelau",
        short_name: "Tokelau",
        alpha2: "TK",
        alpha3: "TKL",
        numeric: "772",
        currencies: &["NZD"],
    },
    CountryData {
        name: "Tonga",
        short_name: "Tonga",
        alpha2: "TO",
        alpha3: "TON",
        numeric: "776",
        currencies: &["TOP"],
    },
    CountryData {
        name: "Trinidad and Tobago",
        short_name: "Trinidad and Tobago",
        alpha2: "TT",
        alpha3: "TTO",
        numeric: "780",
        currencies: &["TTD"],
    },
    CountryData {
        name: "Tunisia",
        short_name: "Tunisia",
        alpha2: "TN",
        alpha3: "TUN",
        numeric: "788",
        currencies: &["TND"],
    },
    CountryData {
        name: "Türkiye",
        short_name: "Turkey",
        alpha2: "TR",
        alpha3: "TUR",
        numeric: "792",
        currencies: &["TRY"],
    },
    CountryData {
        name: "Turkmenistan",
        short_name: "Turkmenistan",
        alpha2: "TM",
        alpha3: "TKM",
        numeric: "795",
        currencies: &["TMT"],
    },
    CountryData {
        name: "Turks and Caicos Islands",
        short_name: "Turks and Caicos Islands",
        alpha2: "TC",
        alpha3: "TCA",
        numeric: "796",
        currencies: &["USD"],
    },
    CountryData {
        name: "Tuvalu",
        short_name: "Tuvalu",
        alpha2: "TV",
        alpha3: "TUV",
        numeric: "798",
        currencies: &["AUD"],
    },
    CountryData {
        name: "Uganda",
        short_name: "Uganda",
        alpha2: "UG",
        alpha3: "UGA",
        numeric: "800",
        currencies: &["UGX"],
    },
    CountryData {
        name: "Ukraine",
        short_name: "Ukraine",
        alpha2: "UA",
        alpha3: "UKR",
        numeric: "804",
        currencies: &["UAH"],
    },
    CountryData {
        name: "United Arab Emirates",
        short_name: "United Arab Emirates",
        alpha2: "AE",
        alpha3: "ARE",
        numeric: "784",
        currencies: &["AED"],
    },
    CountryData {
        name: "United Kingdom of Great Britain and Northern Ireland",
        short_name: "United Kingdom",
        alpha2: "GB",
        alpha3: "GBR",
        numeric: "826",
        currencies: &["GBP"],
    },
    CountryData {
        name: "United States of America",
        short_name: "United States",
        alpha2: "US",
        alpha3: "USA",
        numeric: "840",
        currencies: &["USD"],
    },
    CountryData {
        name: "United States Minor Outlying Islands",
        short_name: "United States Minor Outlying Islands",
        alpha2: "UM",
        alpha3: "UMI",
        numeric: "581",
        currencies: &["USD"],
    },
    CountryData {
        name: "Uruguay",
        short_name: "Uruguay",
        alpha2: "UY",
        alpha3: "URY",
        numeric: "858",
        currencies: &["UYU"],
    },
    CountryData {
        name: "Uzbekistan",
        short_name: "Uzbekistan",
        alpha2: "UZ",
        alpha3: "UZB",
        numeric: "860",
        currencies: &["UZS"],
    },
    CountryData {
        name: "Vanuatu",
        short_name: "Vanuatu",
        alpha2: "VU",
        alpha3: "VUT",
        numeric: "548",
        currencies: &["VUV"],
    },
    CountryData {
        name: "Venezuela (Bolivarian Republic of)",
        short_name: "Venezuela",
        alpha2: "VE",
        alpha3: "VEN",
        numeric: "862",
        currencies: &["VES"],
    },
    CountryData {
        name: "Viet Nam",
        short_name: "Vietnam",
        alpha2: "VN",
        alpha3: "VNM",
        numeric: "704",
        currencies: &["VND"],
    },
    CountryData {
        name: "Virgin Islands (British)",
        short_name: "British Virgin Islands",
        alpha2: "VG",
        alpha3: "VGB",
        numeric: "092",
        currencies: &["USD"],
    },
    CountryData {
        name: "Virgin Islands (U.S.)",
        short_name: "U.S. Virgin Islands",
        alpha2: "VI",
        alpha3: "VIR",
        numeric: "850",
        currencies: &["USD"],
    },
    CountryData {
        name: "Wallis and Futuna",
        short_name: "Wallis and Futuna",
        alpha2: "WF",
        alpha3: "WLF",
        numeric: "876",
        currencies: &["XPF"],
    },
    CountryData {
        name: "Western Sahara",
        short_name: "Western Sahara",
        alpha2: "EH",
        alpha3: "ESH",
        numeric: "732",
        currencies: &["MAD"],
    },
    CountryData {
        name: "Yemen",
        short_name: "Yemen",
        alpha2: "YE",
        alpha3: "YEM",
        numeric: "887",
        currencies: &["YER"],
    },
    CountryData {
        name: "Zambia",
        short_name: "Zambia",
        alpha2: "ZM",
        alpha3: "ZMB",
        numeric: "894",
        currencies: &["ZMW"],
    },
    CountryData {
        name: "Zimbabwe",
        short_name: "Zimbabwe",
        alpha2: "ZW",
        alpha3: "ZWE",
        numeric: "716",
        currencies: &["ZWG", "USD"],
    },
];
