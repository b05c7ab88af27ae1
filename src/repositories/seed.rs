//! 启动时载入的示例数据

use crate::models::{
    Album, Anniversary, Author, Calendar, Moment, MomentImage, Photo, Place, PlaceImage, User,
    Wish,
};

fn cover(id: i64, seed: i64) -> Photo {
    Photo {
        id,
        album_id: id,
        url: format!("https://picsum.photos/600/400?random={}", seed),
        thumbnail_url: Some(format!("https://picsum.photos/300/200?random={}", seed)),
        description: None,
        created_at: None,
    }
}

pub fn albums() -> Vec<Album> {
    let album = |id, name: &str, description: &str, cover_image, created_at: &str, photo_count| Album {
        id,
        name: name.to_string(),
        description: description.to_string(),
        cover_image,
        created_at: created_at.to_string(),
        photo_count,
    };

    vec![
        album(1, "我们的第一次旅行", "北京之旅", Some(cover(1, 2001)), "2023-05-01", 24),
        album(2, "浪漫的夜晚", "上海外滩", Some(cover(2, 2002)), "2023-08-15", 18),
        album(3, "春天的约会", "杭州西湖", Some(cover(3, 2003)), "2024-03-20", 32),
        album(4, "周末的周末", "苏州", None, "2024-07-01", 10),
        album(5, "周末的周末", "上海", None, "2024-07-01", 10),
    ]
}

pub fn anniversaries() -> Vec<Anniversary> {
    let entry = |id, title: &str, date: &str, description: &str, calendar| Anniversary {
        id,
        title: title.to_string(),
        date: date.to_string(),
        description: description.to_string(),
        calendar,
    };

    vec![
        entry(1, "初次相遇", "2021-03-15", "在那个阳光明媚的下午，我们第一次相遇", Calendar::Solar),
        entry(2, "第一次约会", "2021-04-02", "一起去看电影，紧张又兴奋", Calendar::Solar),
        entry(3, "确立关系", "2022-05-20", "表白成功的日子，永远难忘", Calendar::Solar),
        entry(4, "第一次旅行", "2022-07-10", "一起去海边，留下了美好的回忆", Calendar::Solar),
        entry(5, "第一次见家长", "2024-01-01", "重要的里程碑，双方父母都很喜欢我们", Calendar::Lunar),
        entry(6, "订婚", "2024-10-10", "许下承诺，决定共度余生", Calendar::Lunar),
        entry(7, "结婚", "2025-05-20", "人生最重要的时刻，终于成为彼此的唯一", Calendar::Lunar),
    ]
}

fn moment_image(id: i64, moment_id: i64) -> MomentImage {
    let seed = 1000 + id;
    MomentImage {
        id,
        moment_id,
        url: format!("https://picsum.photos/600/400?random={}", seed),
        thumbnail_url: format!("https://picsum.photos/200/150?random={}", seed),
        alt: None,
    }
}

pub fn moments() -> Vec<Moment> {
    let moment = |id, content: &str, images, likes, created_at: &str, name: &str, avatar: &str, is_public| Moment {
        id,
        content: content.to_string(),
        images,
        likes,
        created_at: created_at.to_string(),
        author: Author {
            name: name.to_string(),
            avatar: avatar.to_string(),
        },
        is_public,
    };

    vec![
        moment(1, "今天的夕阳真是太美了，和你一起看夕阳是我最幸福的时刻。",
            vec![moment_image(1, 1)], 5, "2024-01-15", "小陆", "", true),
        moment(2, "一起做的第一顿饭，虽然简单但很温暖。生活中的小确幸就是和你在一起的每一天。",
            vec![], 8, "2024-01-22", "小伍", "", false),
        moment(3, "周末的公园散步，发现了一个很美的小湖，下次我们带野餐垫来吧！",
            vec![moment_image(2, 3), moment_image(3, 3)], 3, "2024-02-05", "小陆", "", true),
        moment(4, "今天是我们在一起的第365天，时间过得真快，但每一天都很珍贵。",
            vec![], 12, "2024-02-10", "小伍", "", true),
        moment(5, "一起看的电影太好看了，回家的路上还在讨论剧情呢！",
            vec![moment_image(4, 4), moment_image(5, 4)], 6, "2024-02-18", "小陆",
            "https://picsum.photos/200/200?random=1016", true),
        moment(6, "下雨天窝在家里一起煮火锅，外面雨声阵阵，屋内热气腾腾，这就是家的感觉吧。",
            vec![moment_image(6, 5), moment_image(7, 5)], 9, "2024-03-02", "小伍", "", true),
        moment(7, "一起去爬山，虽然很累但是山顶的风景真的值得！",
            vec![], 7, "2024-03-15", "小陆", "", true),
        moment(8, "你送我的花已经开了，粉粉的特别好看，就像你一样温柔。",
            vec![], 11, "2024-03-22", "小伍", "", true),
    ]
}

pub fn places() -> Vec<Place> {
    let image = |id: i64| PlaceImage {
        id,
        place_id: id,
        url: format!("https://picsum.photos/200/300?random={}", id),
        thumbnail_url: Some(format!("https://picsum.photos/200/300?random={}", id)),
    };
    let place = |id, name: &str, latitude, longitude, image, description: &str, date: &str| Place {
        id,
        name: name.to_string(),
        latitude,
        longitude,
        image,
        description: description.to_string(),
        date: date.to_string(),
    };

    vec![
        place(1, "北京天安门", 39.9092, 116.3975, Some(image(1)), "我们的第一次旅行", "2023-05-01"),
        place(2, "上海外滩", 31.2363, 121.4903, Some(image(2)), "浪漫的夜晚", "2023-08-15"),
        place(3, "杭州西湖", 30.2424, 120.1495, None, "春天的约会", "2024-03-20"),
        place(4, "成都宽窄巷子", 30.6701, 104.0661, None, "美食之旅", "2024-05-01"),
        place(5, "西安兵马俑", 34.3839, 109.2719, None, "历史探索", "2024-07-15"),
    ]
}

pub fn wishes() -> Vec<Wish> {
    let wish = |id, content: &str, author_name: &str, email: &str, created_at: &str, approved| Wish {
        id,
        content: content.to_string(),
        author_name: author_name.to_string(),
        email: email.to_string(),
        created_at: created_at.to_string(),
        approved,
    };

    vec![
        wish(1, "祝你们永远幸福，白头偕老！", "朋友小王", "wang@example.com", "2024-10-15 14:30:22", false),
        wish(2, "看着你们幸福的样子，真让人羡慕，祝你们永远甜蜜！", "同事小李", "li@example.com", "2024-10-16 09:15:33", true),
        wish(3, "爱情最美的样子就是你们这样，祝愿你们的爱情长长久久！", "表姐小张", "zhang@example.com", "2024-10-17 18:45:11", false),
        wish(4, "愿你们的爱情如美酒般越来越醇香！", "同学小刘", "liu@example.com", "2024-10-18 11:20:45", true),
        wish(5, "真心祝愿你们幸福美满，永远相爱！", "邻居小陈", "chen@example.com", "2024-10-19 20:10:12", false),
        wish(6, "看到你们这么恩爱，我也要加油找到另一半！", "室友小赵", "zhao@example.com", "2024-10-20 15:30:55", true),
        wish(7, "你们是天生一对，地设一双！", "长辈小孙", "sun@example.com", "2024-10-21 08:45:22", false),
        wish(8, "爱情的花朵在你们心中绽放，愿它永远不凋零！", "远方朋友小周", "zhou@example.com", "2024-10-22 16:25:30", true),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id, name: &str, email: &str, role: &str| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        join_date: "2021-01-01".to_string(),
        avatar: String::new(),
        avatar_id: 0,
    };

    vec![
        user(1, "小伍", "xiaowu@example.com", "男朋友"),
        user(2, "小陆", "xiaolu@example.com", "女朋友"),
    ]
}
