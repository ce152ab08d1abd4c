//! Built-in device table.
//!
//! Order matters: lookup returns the first record that matches, so base
//! models precede their "Plus"/"Pro" siblings and the older hardware
//! revision of a product precedes the newer one.

use crate::model::{Chip, DeviceRecord};

fn device(
    name: &str,
    identifiers: &[&str],
    model_numbers: &[&str],
    chip: Chip,
    release_year: u16,
    storage_options: &[u32],
    has_bootrom_exploit: bool,
) -> DeviceRecord {
    DeviceRecord {
        name: name.to_string(),
        identifiers: identifiers.iter().map(|s| s.to_string()).collect(),
        model_numbers: model_numbers.iter().map(|s| s.to_string()).collect(),
        chip,
        release_year,
        storage_options: storage_options.to_vec(),
        has_bootrom_exploit,
    }
}

pub(crate) fn devices() -> Vec<DeviceRecord> {
    let mut all = iphones();
    all.extend(ipods());
    all.extend(ipads());
    all
}

fn iphones() -> Vec<DeviceRecord> {
    use Chip::*;
    vec![
        device("iPhone", &["iPhone1,1"], &["A1203"], S5L8900, 2007, &[4, 8, 16], true),
        device("iPhone 3G", &["iPhone1,2"], &["A1241", "A1324"], S5L8900, 2008, &[8, 16], true),
        device("iPhone 3GS", &["iPhone2,1"], &["A1303", "A1325"], S5L8920, 2009, &[8, 16, 32], true),
        device(
            "iPhone 4",
            &["iPhone3,1", "iPhone3,2", "iPhone3,3"],
            &["A1332", "A1349"],
            A4,
            2010,
            &[8, 16, 32],
            true,
        ),
        device("iPhone 4S", &["iPhone4,1"], &["A1387", "A1431"], A5, 2011, &[8, 16, 32, 64], true),
        device(
            "iPhone 5",
            &["iPhone5,1", "iPhone5,2"],
            &["A1428", "A1429", "A1442"],
            A6,
            2012,
            &[16, 32, 64],
            true,
        ),
        device(
            "iPhone 5c",
            &["iPhone5,3", "iPhone5,4"],
            &["A1456", "A1507", "A1516", "A1526", "A1529", "A1532"],
            A6,
            2013,
            &[8, 16, 32],
            true,
        ),
        device(
            "iPhone 5s",
            &["iPhone6,1", "iPhone6,2"],
            &["A1453", "A1457", "A1518", "A1528", "A1530", "A1533"],
            A7,
            2013,
            &[16, 32, 64],
            true,
        ),
        device(
            "iPhone 6",
            &["iPhone7,2"],
            &["A1549", "A1586", "A1589"],
            A8,
            2014,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPhone 6 Plus",
            &["iPhone7,1"],
            &["A1522", "A1524", "A1593"],
            A8,
            2014,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPhone 6s",
            &["iPhone8,1"],
            &["A1633", "A1688", "A1700"],
            A9,
            2015,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPhone 6s Plus",
            &["iPhone8,2"],
            &["A1634", "A1687", "A1699"],
            A9,
            2015,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPhone SE (1st generation)",
            &["iPhone8,4"],
            &["A1662", "A1723", "A1724"],
            A9,
            2016,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPhone 7",
            &["iPhone9,1", "iPhone9,3"],
            &["A1660", "A1778", "A1779", "A1780"],
            A10,
            2016,
            &[32, 128, 256],
            true,
        ),
        device(
            "iPhone 7 Plus",
            &["iPhone9,2", "iPhone9,4"],
            &["A1661", "A1784", "A1785", "A1786"],
            A10,
            2016,
            &[32, 128, 256],
            true,
        ),
        device(
            "iPhone 8",
            &["iPhone10,1", "iPhone10,4"],
            &["A1863", "A1905", "A1906", "A1907"],
            A11,
            2017,
            &[64, 128, 256],
            true,
        ),
        device(
            "iPhone 8 Plus",
            &["iPhone10,2", "iPhone10,5"],
            &["A1864", "A1897", "A1898", "A1899"],
            A11,
            2017,
            &[64, 128, 256],
            true,
        ),
        device(
            "iPhone X",
            &["iPhone10,3", "iPhone10,6"],
            &["A1865", "A1901", "A1902"],
            A11,
            2017,
            &[64, 256],
            true,
        ),
        device(
            "iPhone XS",
            &["iPhone11,2"],
            &["A1920", "A2097", "A2098", "A2100"],
            A12,
            2018,
            &[64, 256, 512],
            false,
        ),
        device(
            "iPhone XS Max",
            &["iPhone11,4", "iPhone11,6"],
            &["A1921", "A2101", "A2102", "A2104"],
            A12,
            2018,
            &[64, 256, 512],
            false,
        ),
        device(
            "iPhone XR",
            &["iPhone11,8"],
            &["A1984", "A2105", "A2106", "A2108"],
            A12,
            2018,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 11",
            &["iPhone12,1"],
            &["A2111", "A2221", "A2223"],
            A13,
            2019,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 11 Pro",
            &["iPhone12,3"],
            &["A2160", "A2215", "A2217"],
            A13,
            2019,
            &[64, 256, 512],
            false,
        ),
        device(
            "iPhone 11 Pro Max",
            &["iPhone12,5"],
            &["A2161", "A2218", "A2220"],
            A13,
            2019,
            &[64, 256, 512],
            false,
        ),
        device(
            "iPhone SE (2nd generation)",
            &["iPhone12,8"],
            &["A2275", "A2296", "A2298"],
            A13,
            2020,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 12 mini",
            &["iPhone13,1"],
            &["A2176", "A2398", "A2399", "A2400"],
            A14,
            2020,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 12",
            &["iPhone13,2"],
            &["A2172", "A2402", "A2403", "A2404"],
            A14,
            2020,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 12 Pro",
            &["iPhone13,3"],
            &["A2341", "A2406", "A2407", "A2408"],
            A14,
            2020,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 12 Pro Max",
            &["iPhone13,4"],
            &["A2342", "A2410", "A2411", "A2412"],
            A14,
            2020,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 13 mini",
            &["iPhone14,4"],
            &["A2481", "A2626", "A2628", "A2629", "A2630"],
            A15,
            2021,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 13",
            &["iPhone14,5"],
            &["A2482", "A2631", "A2633", "A2634", "A2635"],
            A15,
            2021,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 13 Pro",
            &["iPhone14,2"],
            &["A2483", "A2636", "A2638", "A2639", "A2640"],
            A15,
            2021,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPhone 13 Pro Max",
            &["iPhone14,3"],
            &["A2484", "A2641", "A2643", "A2644", "A2645"],
            A15,
            2021,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPhone SE (3rd generation)",
            &["iPhone14,6"],
            &["A2595", "A2782", "A2783", "A2784", "A2785"],
            A15,
            2022,
            &[64, 128, 256],
            false,
        ),
        device(
            "iPhone 14",
            &["iPhone14,7"],
            &["A2649", "A2881", "A2882", "A2883", "A2884"],
            A15,
            2022,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 14 Plus",
            &["iPhone14,8"],
            &["A2632", "A2885", "A2886", "A2887", "A2888"],
            A15,
            2022,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 14 Pro",
            &["iPhone15,2"],
            &["A2650", "A2889", "A2890", "A2891", "A2892"],
            A16,
            2022,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPhone 14 Pro Max",
            &["iPhone15,3"],
            &["A2651", "A2893", "A2894", "A2895", "A2896"],
            A16,
            2022,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPhone 15",
            &["iPhone15,4"],
            &["A2846", "A3089", "A3090", "A3092"],
            A16,
            2023,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 15 Plus",
            &["iPhone15,5"],
            &["A2847", "A3093", "A3094", "A3096"],
            A16,
            2023,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPhone 15 Pro",
            &["iPhone16,1"],
            &["A2848", "A3101", "A3102", "A3104"],
            A17Pro,
            2023,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPhone 15 Pro Max",
            &["iPhone16,2"],
            &["A2849", "A3105", "A3106", "A3108"],
            A17Pro,
            2023,
            &[256, 512, 1024],
            false,
        ),
        device("iPhone 16", &["iPhone17,3"], &[], A18, 2024, &[128, 256, 512], false),
        device("iPhone 16 Plus", &["iPhone17,4"], &[], A18, 2024, &[128, 256, 512], false),
        device("iPhone 16 Pro", &["iPhone17,1"], &[], A18Pro, 2024, &[128, 256, 512, 1024], false),
        device("iPhone 16 Pro Max", &["iPhone17,2"], &[], A18Pro, 2024, &[256, 512, 1024], false),
        device("iPhone 16e", &["iPhone17,5"], &[], A18, 2025, &[128, 256, 512], false),
        device("iPhone 17", &[], &[], A19, 2025, &[256, 512], false),
        device("iPhone Air", &[], &[], A19Pro, 2025, &[256, 512, 1024], false),
        device("iPhone 17 Pro", &[], &[], A19Pro, 2025, &[256, 512, 1024], false),
        device("iPhone 17 Pro Max", &[], &[], A19Pro, 2025, &[256, 512, 1024, 2048], false),
    ]
}

fn ipods() -> Vec<DeviceRecord> {
    use Chip::*;
    vec![
        device("iPod touch (1st generation)", &["iPod1,1"], &["A1213"], S5L8900, 2007, &[8, 16, 32], true),
        // Early units shipped with the 24kpwn-vulnerable bootrom; MC-prefixed units did not.
        device("iPod touch (2nd generation)", &["iPod2,1"], &["A1288"], S5L8720, 2008, &[8, 16, 32], true),
        device("iPod touch (2nd generation)", &["iPod2,1"], &["A1288"], S5L8720, 2009, &[8, 16, 32], false),
        device("iPod touch (3rd generation)", &["iPod3,1"], &["A1318"], S5L8922, 2009, &[32, 64], true),
        device("iPod touch (4th generation)", &["iPod4,1"], &["A1367"], A4, 2010, &[8, 16, 32, 64], true),
        device("iPod touch (5th generation)", &["iPod5,1"], &["A1421", "A1509"], A5, 2012, &[16, 32, 64], true),
        device("iPod touch (6th generation)", &["iPod7,1"], &["A1574"], A8, 2015, &[16, 32, 64, 128], true),
        device("iPod touch (7th generation)", &["iPod9,1"], &["A2178"], A10, 2019, &[32, 128, 256], true),
    ]
}

fn ipads() -> Vec<DeviceRecord> {
    use Chip::*;
    vec![
        device("iPad", &["iPad1,1"], &["A1219", "A1337"], A4, 2010, &[16, 32, 64], true),
        device(
            "iPad 2",
            &["iPad2,1", "iPad2,2", "iPad2,3", "iPad2,4"],
            &["A1395", "A1396", "A1397"],
            A5,
            2011,
            &[16, 32, 64],
            true,
        ),
        device(
            "iPad (3rd generation)",
            &["iPad3,1", "iPad3,2", "iPad3,3"],
            &["A1416", "A1403", "A1430"],
            A5X,
            2012,
            &[16, 32, 64],
            true,
        ),
        device(
            "iPad (4th generation)",
            &["iPad3,4", "iPad3,5", "iPad3,6"],
            &["A1458", "A1459", "A1460"],
            A6X,
            2012,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPad (5th generation)",
            &["iPad6,11", "iPad6,12"],
            &["A1822", "A1823"],
            A9,
            2017,
            &[32, 128],
            true,
        ),
        device(
            "iPad (6th generation)",
            &["iPad7,5", "iPad7,6"],
            &["A1893", "A1954"],
            A10,
            2018,
            &[32, 128],
            true,
        ),
        device(
            "iPad (7th generation)",
            &["iPad7,11", "iPad7,12"],
            &["A2197", "A2198", "A2200"],
            A10,
            2019,
            &[32, 128],
            true,
        ),
        device(
            "iPad (8th generation)",
            &["iPad11,6", "iPad11,7"],
            &["A2270", "A2428", "A2429", "A2430"],
            A12,
            2020,
            &[32, 128],
            false,
        ),
        device(
            "iPad (9th generation)",
            &["iPad12,1", "iPad12,2"],
            &["A2602", "A2603", "A2604", "A2605"],
            A13,
            2021,
            &[64, 256],
            false,
        ),
        device(
            "iPad (10th generation)",
            &["iPad13,18", "iPad13,19"],
            &["A2696", "A2757", "A2777"],
            A14,
            2022,
            &[64, 256],
            false,
        ),
        device("iPad (A16)", &["iPad15,7", "iPad15,8"], &[], A16, 2025, &[128, 256, 512], false),
        device(
            "iPad mini",
            &["iPad2,5", "iPad2,6", "iPad2,7"],
            &["A1432", "A1454", "A1455"],
            A5,
            2012,
            &[16, 32, 64],
            true,
        ),
        device(
            "iPad mini 2",
            &["iPad4,4", "iPad4,5", "iPad4,6"],
            &["A1489", "A1490", "A1491"],
            A7,
            2013,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPad mini 3",
            &["iPad4,7", "iPad4,8", "iPad4,9"],
            &["A1599", "A1600"],
            A7,
            2014,
            &[16, 64, 128],
            true,
        ),
        device(
            "iPad mini 4",
            &["iPad5,1", "iPad5,2"],
            &["A1538", "A1550"],
            A8,
            2015,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPad mini (5th generation)",
            &["iPad11,1", "iPad11,2"],
            &["A2133", "A2124", "A2125", "A2126"],
            A12,
            2019,
            &[64, 256],
            false,
        ),
        device(
            "iPad mini (6th generation)",
            &["iPad14,1", "iPad14,2"],
            &["A2567", "A2568", "A2569"],
            A15,
            2021,
            &[64, 256],
            false,
        ),
        device(
            "iPad mini (A17 Pro)",
            &["iPad16,1", "iPad16,2"],
            &[],
            A17Pro,
            2024,
            &[128, 256, 512],
            false,
        ),
        device(
            "iPad Air",
            &["iPad4,1", "iPad4,2", "iPad4,3"],
            &["A1474", "A1475", "A1476"],
            A7,
            2013,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPad Air 2",
            &["iPad5,3", "iPad5,4"],
            &["A1566", "A1567"],
            A8X,
            2014,
            &[16, 32, 64, 128],
            true,
        ),
        device(
            "iPad Air (3rd generation)",
            &["iPad11,3", "iPad11,4"],
            &["A2152", "A2123", "A2153", "A2154"],
            A12,
            2019,
            &[64, 256],
            false,
        ),
        device(
            "iPad Air (4th generation)",
            &["iPad13,1", "iPad13,2"],
            &["A2316", "A2324", "A2325", "A2072"],
            A14,
            2020,
            &[64, 256],
            false,
        ),
        device(
            "iPad Air (5th generation)",
            &["iPad13,16", "iPad13,17"],
            &["A2588", "A2589", "A2591"],
            M1,
            2022,
            &[64, 256],
            false,
        ),
        device("iPad Air 11-inch (M2)", &["iPad14,8", "iPad14,9"], &[], M2, 2024, &[128, 256, 512, 1024], false),
        device("iPad Air 13-inch (M2)", &["iPad14,10", "iPad14,11"], &[], M2, 2024, &[128, 256, 512, 1024], false),
        device("iPad Air 11-inch (M3)", &["iPad15,3", "iPad15,4"], &[], M3, 2025, &[128, 256, 512, 1024], false),
        device("iPad Air 13-inch (M3)", &["iPad15,5", "iPad15,6"], &[], M3, 2025, &[128, 256, 512, 1024], false),
        device(
            "iPad Pro 12.9-inch (1st generation)",
            &["iPad6,7", "iPad6,8"],
            &["A1584", "A1652"],
            A9X,
            2015,
            &[32, 128, 256],
            true,
        ),
        device(
            "iPad Pro 9.7-inch",
            &["iPad6,3", "iPad6,4"],
            &["A1673", "A1674", "A1675"],
            A9X,
            2016,
            &[32, 128, 256],
            true,
        ),
        device(
            "iPad Pro 12.9-inch (2nd generation)",
            &["iPad7,1", "iPad7,2"],
            &["A1670", "A1671", "A1821"],
            A10X,
            2017,
            &[64, 256, 512],
            true,
        ),
        device(
            "iPad Pro 10.5-inch",
            &["iPad7,3", "iPad7,4"],
            &["A1701", "A1709", "A1852"],
            A10X,
            2017,
            &[64, 256, 512],
            true,
        ),
        device(
            "iPad Pro 11-inch (1st generation)",
            &["iPad8,1", "iPad8,2", "iPad8,3", "iPad8,4"],
            &["A1980", "A2013", "A1934", "A1979"],
            A12X,
            2018,
            &[64, 256, 512, 1024],
            false,
        ),
        device(
            "iPad Pro 12.9-inch (3rd generation)",
            &["iPad8,5", "iPad8,6", "iPad8,7", "iPad8,8"],
            &["A1876", "A2014", "A1895", "A1983"],
            A12X,
            2018,
            &[64, 256, 512, 1024],
            false,
        ),
        device(
            "iPad Pro 11-inch (2nd generation)",
            &["iPad8,9", "iPad8,10"],
            &["A2228", "A2068", "A2230", "A2231"],
            A12Z,
            2020,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPad Pro 12.9-inch (4th generation)",
            &["iPad8,11", "iPad8,12"],
            &["A2229", "A2069", "A2232", "A2233"],
            A12Z,
            2020,
            &[128, 256, 512, 1024],
            false,
        ),
        device(
            "iPad Pro 11-inch (3rd generation)",
            &["iPad13,4", "iPad13,5", "iPad13,6", "iPad13,7"],
            &["A2377", "A2459", "A2301", "A2460"],
            M1,
            2021,
            &[128, 256, 512, 1024, 2048],
            false,
        ),
        device(
            "iPad Pro 12.9-inch (5th generation)",
            &["iPad13,8", "iPad13,9", "iPad13,10", "iPad13,11"],
            &["A2378", "A2461", "A2379", "A2462"],
            M1,
            2021,
            &[128, 256, 512, 1024, 2048],
            false,
        ),
        device(
            "iPad Pro 11-inch (4th generation)",
            &["iPad14,3", "iPad14,4"],
            &["A2759", "A2435", "A2761", "A2762"],
            M2,
            2022,
            &[128, 256, 512, 1024, 2048],
            false,
        ),
        device(
            "iPad Pro 12.9-inch (6th generation)",
            &["iPad14,5", "iPad14,6"],
            &["A2436", "A2764", "A2437", "A2766"],
            M2,
            2022,
            &[128, 256, 512, 1024, 2048],
            false,
        ),
        device("iPad Pro 11-inch (M4)", &["iPad16,3", "iPad16,4"], &[], M4, 2024, &[256, 512, 1024, 2048], false),
        device("iPad Pro 13-inch (M4)", &["iPad16,5", "iPad16,6"], &[], M4, 2024, &[256, 512, 1024, 2048], false),
    ]
}
